use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::loans::dto::{LoanDto, ReturnReceipt};

pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait LoanService: Sync + Send {
    async fn checkout(&self, borrower_id: &str, book_id: &str) -> LibraryResult<LoanDto>;
    async fn return_loan(&self, loan_id: &str) -> LibraryResult<ReturnReceipt>;
    async fn query_overdue(&self, predicate: &HashMap<String, String>,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<LoanDto>>;
}
