use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::Book;
use crate::borrowers::domain::Borrower;
use crate::core::domain::Identifiable;
use crate::core::library::LoanStatus;
use crate::utils::date::serializer;

// LoanDto abstracts the book that is checked out by a borrower.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct LoanDto {
    pub loan_id: String,
    pub version: i64,
    pub branch_id: String,
    pub book_id: String,
    pub borrower_id: String,
    pub loan_status: LoanStatus,
    #[serde(with = "serializer")]
    pub checkout_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    pub returned_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl LoanDto {
    pub fn from_borrower_book(branch_id: &str, borrower: &dyn Borrower,
                              book: &dyn Book, loan_days: i64) -> Self {
        let now = Utc::now().naive_utc();
        LoanDto {
            loan_id: Uuid::new_v4().to_string(),
            version: 0,
            branch_id: branch_id.to_string(),
            book_id: book.id(),
            borrower_id: borrower.id(),
            loan_status: LoanStatus::CheckedOut,
            checkout_at: now,
            due_at: now + Duration::days(loan_days),
            returned_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Identifiable for LoanDto {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

// ReturnReceipt reports the outcome of a return, including any fine owed for
// an overdue loan; no payment is collected here.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct ReturnReceipt {
    pub loan: LoanDto,
    pub overdue_days: i64,
    pub fine_amount: i64,
}

impl ReturnReceipt {
    pub fn new(loan: LoanDto, overdue_days: i64, fine_amount: i64) -> Self {
        Self {
            loan,
            overdue_days,
            fine_amount,
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.overdue_days > 0 || self.fine_amount > 0
    }
}
