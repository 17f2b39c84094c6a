use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::library::{LibraryError, LibraryResult, LoanStatus, PaginatedResult};
use crate::core::repository::Repository;
use crate::loans::domain::model::LoanEntity;
use crate::loans::repository::LoanRepository;
use crate::utils::store::{attach_table, matches_predicate, to_page, MemTable};

#[derive(Debug)]
pub(crate) struct MemLoanRepository {
    table: MemTable<LoanEntity>,
}

impl MemLoanRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table: attach_table(table_name),
        }
    }
}

#[async_trait]
impl Repository<LoanEntity> for MemLoanRepository {
    async fn create(&self, entity: &LoanEntity) -> LibraryResult<usize> {
        self.table.insert(entity.loan_id.as_str(), entity)
    }

    async fn update(&self, entity: &LoanEntity) -> LibraryResult<usize> {
        let existing = self.table.get(entity.loan_id.as_str())?;
        if existing.version != entity.version {
            return Err(LibraryError::validation(
                format!("stale version {} for loan {}", entity.version,
                        entity.loan_id).as_str(), Some("409".to_string())));
        }
        let mut updated = entity.clone();
        updated.version = entity.version + 1;
        updated.updated_at = Utc::now().naive_utc();
        self.table.replace(entity.loan_id.as_str(), &updated)
    }

    async fn get(&self, id: &str) -> LibraryResult<LoanEntity> {
        self.table.get(id)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.table.remove(id)
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<LoanEntity>> {
        let mut matched = vec![];
        for (_, loan) in self.table.sorted_rows() {
            if matches_predicate(&loan, predicate)? {
                matched.push(loan);
            }
        }
        Ok(to_page(matched, page, page_size))
    }
}

#[async_trait]
impl LoanRepository for MemLoanRepository {
    async fn query_overdue(&self, predicate: &HashMap<String, String>,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<LoanEntity>> {
        let now = Utc::now().naive_utc();
        let mut matched = vec![];
        for (_, loan) in self.table.sorted_rows() {
            if loan.loan_status == LoanStatus::CheckedOut && now > loan.due_at
                && matches_predicate(&loan, predicate)? {
                matched.push(loan);
            }
        }
        Ok(to_page(matched, page, page_size))
    }
}
