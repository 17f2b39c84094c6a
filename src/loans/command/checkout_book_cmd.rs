use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;

pub(crate) struct CheckoutBookCommand {
    loan_service: Box<dyn LoanService>,
}

impl CheckoutBookCommand {
    pub(crate) fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutBookCommandRequest {
    borrower_id: String,
    book_id: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(borrower_id: String, book_id: String) -> Self {
        Self {
            borrower_id,
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct CheckoutBookCommandResponse {
    pub loan: LoanDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.loan_service.checkout(req.borrower_id.as_str(), req.book_id.as_str())
            .await.map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
