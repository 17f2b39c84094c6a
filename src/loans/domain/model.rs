use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::LoanStatus;
use crate::utils::date::serializer;

// LoanEntity binds one book to one borrower for a bounded period; the status
// moves from CheckedOut to Returned exactly once.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct LoanEntity {
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

impl LoanEntity {
    pub fn new(branch_id: &str, book_id: &str, borrower_id: &str, loan_days: i64) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            loan_id: Uuid::new_v4().to_string(),
            version: 0,
            branch_id: branch_id.to_string(),
            book_id: book_id.to_string(),
            borrower_id: borrower_id.to_string(),
            loan_status: LoanStatus::CheckedOut,
            checkout_at: now,
            due_at: now + Duration::days(loan_days),
            returned_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_returned(&self) -> bool {
        self.loan_status == LoanStatus::Returned
    }

    // whole days elapsed past the due time; a return at or before the due
    // time counts as zero
    pub fn overdue_days(&self, now: NaiveDateTime) -> i64 {
        if now > self.due_at {
            (now - self.due_at).num_days()
        } else {
            0
        }
    }
}
