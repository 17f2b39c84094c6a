use std::collections::HashMap;
use chrono::Utc;
use async_trait::async_trait;
use tracing::log::{info, warn};
use crate::books::domain::Book;
use crate::books::repository::BookRepository;
use crate::borrowers::domain::Borrower;
use crate::borrowers::repository::BorrowerRepository;
use crate::core::domain::Configuration;
use crate::core::library::{BookStatus, LibraryError, LibraryResult, LoanStatus, PaginatedResult};
use crate::fines::domain::FineCalculator;
use crate::loans::domain::LoanService;
use crate::loans::domain::model::LoanEntity;
use crate::loans::dto::{LoanDto, ReturnReceipt};
use crate::loans::repository::LoanRepository;
use crate::notify::channels::NotificationChannel;
use crate::utils::date::format_due_date;

pub(crate) struct LoanServiceImpl {
    branch_id: String,
    loan_days: i64,
    loan_repository: Box<dyn LoanRepository>,
    book_repository: Box<dyn BookRepository>,
    borrower_repository: Box<dyn BorrowerRepository>,
    fine_calculator: Box<dyn FineCalculator>,
    notification_channel: Box<dyn NotificationChannel>,
}

impl LoanServiceImpl {
    pub(crate) fn new(config: &Configuration, loan_repository: Box<dyn LoanRepository>,
                      book_repository: Box<dyn BookRepository>,
                      borrower_repository: Box<dyn BorrowerRepository>,
                      fine_calculator: Box<dyn FineCalculator>,
                      notification_channel: Box<dyn NotificationChannel>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            loan_days: config.book_loan_days,
            loan_repository,
            book_repository,
            borrower_repository,
            fine_calculator,
            notification_channel,
        }
    }

    // a failed or rejected send never rolls back the checkout
    async fn notify_checkout(&self, loan: &LoanDto, title: &str, recipient: &str) {
        let message = format!("You have checked out '{}'. Due back on {}",
                              title, format_due_date(loan.due_at));
        match self.notification_channel.send(message.as_str(), recipient).await {
            Ok(true) => {}
            Ok(false) => {
                warn!("notification for loan {} was not accepted", loan.loan_id);
            }
            Err(err) => {
                warn!("notification for loan {} failed {}", loan.loan_id, err);
            }
        }
    }
}

#[async_trait]
impl LoanService for LoanServiceImpl {
    async fn checkout(&self, borrower_id: &str, book_id: &str) -> LibraryResult<LoanDto> {
        let borrower = self.borrower_repository.get(borrower_id).await?;
        let mut book = self.book_repository.get(book_id).await?;
        if !book.is_available() {
            return Err(LibraryError::book_unavailable(format!("book {} is not available",
                                                              book.book_id).as_str()));
        }
        book.book_status = BookStatus::CheckedOut;
        self.book_repository.update(&book).await?;
        let loan = LoanDto::from_borrower_book(self.branch_id.as_str(), &borrower,
                                               &book, self.loan_days);
        self.loan_repository.create(&LoanEntity::from(&loan)).await?;
        self.notify_checkout(&loan, book.title.as_str(),
                             borrower.recipient().as_str()).await;
        info!("book {} checked out by borrower {} on loan {}",
              book.book_id, borrower.borrower_id, loan.loan_id);
        Ok(loan)
    }

    async fn return_loan(&self, loan_id: &str) -> LibraryResult<ReturnReceipt> {
        let mut existing = self.loan_repository.get(loan_id).await?;
        if existing.is_returned() {
            return Err(LibraryError::already_returned(format!("loan {} has already been returned",
                                                              loan_id).as_str()));
        }
        let now = Utc::now().naive_utc();
        // a return exactly at the due time is on-time
        let overdue_days = existing.overdue_days(now);
        let fine_amount = if now > existing.due_at {
            self.fine_calculator.compute(overdue_days)
        } else {
            0
        };
        if now > existing.due_at {
            warn!("loan {} returned {} days late, fine owed {}",
                  loan_id, overdue_days, fine_amount);
        } else {
            info!("loan {} returned on time", loan_id);
        }
        existing.loan_status = LoanStatus::Returned;
        existing.returned_at = Some(now);
        self.loan_repository.update(&existing).await?;
        let mut book = self.book_repository.get(existing.book_id.as_str()).await?;
        book.book_status = BookStatus::Available;
        self.book_repository.update(&book).await?;
        Ok(ReturnReceipt::new(LoanDto::from(&existing), overdue_days, fine_amount))
    }

    async fn query_overdue(&self, predicate: &HashMap<String, String>,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<LoanDto>> {
        let res = self.loan_repository.query_overdue(predicate, page, page_size).await?;
        let records = res.records.iter().map(LoanDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

impl From<&LoanEntity> for LoanDto {
    fn from(other: &LoanEntity) -> LoanDto {
        LoanDto {
            loan_id: other.loan_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            book_id: other.book_id.to_string(),
            borrower_id: other.borrower_id.to_string(),
            loan_status: other.loan_status,
            checkout_at: other.checkout_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}


impl From<&LoanDto> for LoanEntity {
    fn from(other: &LoanDto) -> LoanEntity {
        LoanEntity {
            loan_id: other.loan_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            book_id: other.book_id.to_string(),
            borrower_id: other.borrower_id.to_string(),
            loan_status: other.loan_status,
            checkout_at: other.checkout_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
