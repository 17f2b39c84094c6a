use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::store::{attach_table, matches_predicate, to_page, MemTable};

#[derive(Debug)]
pub(crate) struct MemBookRepository {
    table: MemTable<BookEntity>,
}

impl MemBookRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table: attach_table(table_name),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.table.insert(entity.book_id.as_str(), entity)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let existing = self.table.get(entity.book_id.as_str())?;
        if existing.version != entity.version {
            return Err(LibraryError::validation(
                format!("stale version {} for book {}", entity.version,
                        entity.book_id).as_str(), Some("409".to_string())));
        }
        let mut updated = entity.clone();
        updated.version = entity.version + 1;
        updated.updated_at = Utc::now().naive_utc();
        self.table.replace(entity.book_id.as_str(), &updated)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.table.get(id)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.table.remove(id)
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        let mut matched = vec![];
        for (_, book) in self.table.sorted_rows() {
            if matches_predicate(&book, predicate)? {
                matched.push(book);
            }
        }
        Ok(to_page(matched, page, page_size))
    }
}

#[async_trait]
impl BookRepository for MemBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Vec<BookEntity>> {
        let res = self.query(
            &HashMap::from([("isbn".to_string(), isbn.to_string())]), None, 100).await?;
        Ok(res.records)
    }
}
