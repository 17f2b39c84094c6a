use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;
use crate::loans::dto::ReturnReceipt;

pub(crate) struct ReturnBookCommand {
    loan_service: Box<dyn LoanService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    loan_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(loan_id: String) -> Self {
        Self {
            loan_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub receipt: ReturnReceipt,
}

impl ReturnBookCommandResponse {
    pub fn new(receipt: ReturnReceipt) -> Self {
        Self {
            receipt,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.loan_service.return_loan(req.loan_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::factory::create_book_repository;
    use crate::borrowers::domain::model::BorrowerEntity;
    use crate::borrowers::factory::create_borrower_repository;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::{BookStatus, FinePolicyKind, LoanStatus};
    use crate::core::repository::RepositoryStore;
    use crate::loans::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::loans::domain::LoanService;
    use crate::loans::factory::create_loan_service;
    use crate::notify::NotificationVia;

    async fn build_service() -> Box<dyn LoanService> {
        create_loan_service(&Configuration::new("test"), RepositoryStore::Memory,
                            FinePolicyKind::Standard, NotificationVia::Sms).await
    }

    #[tokio::test]
    async fn test_should_execute_return_command() {
        let borrower = BorrowerEntity::new("Carlos Lopez", "carlos@org.cc");
        let _ = create_borrower_repository(RepositoryStore::Memory).await
            .create(&borrower).await.expect("should create borrower");
        let book = BookEntity::new("isbn_cmd2", "title2", "author2", BookStatus::Available);
        let _ = create_book_repository(RepositoryStore::Memory).await
            .create(&book).await.expect("should create book");

        let loan = build_service().await.checkout(borrower.borrower_id.as_str(),
                                                  book.book_id.as_str()).await.expect("should checkout");
        let cmd = ReturnBookCommand::new(build_service().await);
        let res = cmd.execute(ReturnBookCommandRequest::new(
            loan.loan_id.to_string())).await.expect("should return");
        assert_eq!(LoanStatus::Returned, res.receipt.loan.loan_status);
        assert_eq!(0, res.receipt.fine_amount);

        let err = cmd.execute(ReturnBookCommandRequest::new(loan.loan_id.to_string())).await;
        assert!(matches!(err, Err(CommandError::AlreadyReturned { message: _ })));
    }

    #[tokio::test]
    async fn test_should_fail_return_for_unknown_loan() {
        let cmd = ReturnBookCommand::new(build_service().await);
        let err = cmd.execute(ReturnBookCommandRequest::new("missing".to_string())).await;
        assert!(matches!(err, Err(CommandError::NotFound { message: _ })));
    }
}
