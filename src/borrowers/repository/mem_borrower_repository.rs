use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::borrowers::domain::model::BorrowerEntity;
use crate::borrowers::repository::BorrowerRepository;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::store::{attach_table, matches_predicate, to_page, MemTable};

#[derive(Debug)]
pub(crate) struct MemBorrowerRepository {
    table: MemTable<BorrowerEntity>,
}

impl MemBorrowerRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table: attach_table(table_name),
        }
    }
}

#[async_trait]
impl Repository<BorrowerEntity> for MemBorrowerRepository {
    async fn create(&self, entity: &BorrowerEntity) -> LibraryResult<usize> {
        self.table.insert(entity.borrower_id.as_str(), entity)
    }

    async fn update(&self, entity: &BorrowerEntity) -> LibraryResult<usize> {
        let existing = self.table.get(entity.borrower_id.as_str())?;
        if existing.version != entity.version {
            return Err(LibraryError::validation(
                format!("stale version {} for borrower {}", entity.version,
                        entity.borrower_id).as_str(), Some("409".to_string())));
        }
        let mut updated = entity.clone();
        updated.version = entity.version + 1;
        updated.updated_at = Utc::now().naive_utc();
        self.table.replace(entity.borrower_id.as_str(), &updated)
    }

    async fn get(&self, id: &str) -> LibraryResult<BorrowerEntity> {
        self.table.get(id)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.table.remove(id)
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BorrowerEntity>> {
        let mut matched = vec![];
        for (_, borrower) in self.table.sorted_rows() {
            if matches_predicate(&borrower, predicate)? {
                matched.push(borrower);
            }
        }
        Ok(to_page(matched, page, page_size))
    }
}

#[async_trait]
impl BorrowerRepository for MemBorrowerRepository {
    async fn find_by_email(&self, email: &str) -> LibraryResult<Vec<BorrowerEntity>> {
        let res = self.query(
            &HashMap::from([("email".to_string(), email.to_string())]), None, 100).await?;
        Ok(res.records)
    }
}
