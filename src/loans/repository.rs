pub mod mem_loan_repository;

use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::loans::domain::model::LoanEntity;


#[async_trait]
pub(crate) trait LoanRepository : Repository<LoanEntity> {
    async fn query_overdue(&self, predicate: &HashMap::<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<LoanEntity>>;
}
