use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use lazy_static::lazy_static;
use serde::Serialize;
use serde_json::Value;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};

// MemTable is a cloneable handle to a named in-memory table where all clones
// share the same rows, so independently created repositories observe the same
// state within the process.
#[derive(Debug, Clone)]
pub(crate) struct MemTable<T: Clone> {
    rows: Arc<RwLock<HashMap<String, T>>>,
}

impl<T: Clone> MemTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub(crate) fn insert(&self, id: &str, row: &T) -> LibraryResult<usize> {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        if rows.contains_key(id) {
            return Err(LibraryError::duplicate_key(
                format!("row with id {} already exists", id).as_str()));
        }
        rows.insert(id.to_string(), row.clone());
        Ok(1)
    }

    pub(crate) fn replace(&self, id: &str, row: &T) -> LibraryResult<usize> {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        if !rows.contains_key(id) {
            return Err(LibraryError::not_found(
                format!("row with id {} not found", id).as_str()));
        }
        rows.insert(id.to_string(), row.clone());
        Ok(1)
    }

    pub(crate) fn get(&self, id: &str) -> LibraryResult<T> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        rows.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("row with id {} not found", id).as_str()))
    }

    pub(crate) fn remove(&self, id: &str) -> LibraryResult<usize> {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        Ok(rows.remove(id).map(|_| 1).unwrap_or(0))
    }

    // rows sorted by id for stable paging
    pub(crate) fn sorted_rows(&self) -> Vec<(String, T)> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let mut all: Vec<(String, T)> = rows.iter()
            .map(|(id, row)| (id.to_string(), row.clone())).collect();
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all
    }
}

lazy_static! {
    static ref REGISTRY: Mutex<HashMap<String, Box<dyn Any + Send + Sync>>> =
        Mutex::new(HashMap::new());
}

// attach_table returns a handle to the named table, creating it on first use.
pub(crate) fn attach_table<T: Clone + Send + Sync + 'static>(table_name: &str) -> MemTable<T> {
    let mut registry = REGISTRY.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(existing) = registry.get(table_name)
        .and_then(|table| table.downcast_ref::<MemTable<T>>()) {
        return existing.clone();
    }
    let table: MemTable<T> = MemTable::new();
    registry.insert(table_name.to_string(), Box::new(table.clone()));
    table
}

pub(crate) fn delete_table(table_name: &str) {
    let mut registry = REGISTRY.lock().unwrap_or_else(|e| e.into_inner());
    registry.remove(table_name);
}

// matches_predicate compares the serialized string form of entity attributes
// against the predicate map; every predicate entry must match.
pub(crate) fn matches_predicate<T: Serialize>(entity: &T,
                                              predicate: &HashMap<String, String>) -> LibraryResult<bool> {
    let val = serde_json::to_value(entity)?;
    for (attr, expected) in predicate {
        let matched = match val.get(attr.as_str()) {
            Some(Value::String(str_val)) => str_val == expected,
            Some(Value::Number(num_val)) => num_val.to_string() == *expected,
            Some(Value::Bool(bool_val)) => bool_val.to_string() == *expected,
            _ => false,
        };
        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

// to_page slices filtered rows into a page where the page token is a row offset.
pub(crate) fn to_page<T: Clone>(rows: Vec<T>, page: Option<&str>,
                                page_size: usize) -> PaginatedResult<T> {
    let start: usize = page.and_then(|p| p.parse().ok()).unwrap_or(0);
    let records: Vec<T> = rows.iter().skip(start).take(page_size).cloned().collect();
    let next_page = if start + page_size < rows.len() {
        Some((start + page_size).to_string())
    } else {
        None
    };
    PaginatedResult::new(page, page_size, next_page, records)
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::library::LibraryError;
    use crate::utils::store::{attach_table, delete_table, matches_predicate, to_page, MemTable};

    #[tokio::test]
    async fn test_should_insert_and_get() {
        let table: MemTable<String> = MemTable::new();
        let _ = table.insert("id1", &"row1".to_string()).expect("should insert");
        assert_eq!("row1", table.get("id1").expect("should get").as_str());
        assert!(matches!(table.insert("id1", &"row2".to_string()),
                         Err(LibraryError::DuplicateKey { message: _ })));
    }

    #[tokio::test]
    async fn test_should_replace_existing() {
        let table: MemTable<String> = MemTable::new();
        assert!(matches!(table.replace("id1", &"row1".to_string()),
                         Err(LibraryError::NotFound { message: _ })));
        let _ = table.insert("id1", &"row1".to_string()).expect("should insert");
        let _ = table.replace("id1", &"row2".to_string()).expect("should replace");
        assert_eq!("row2", table.get("id1").expect("should get").as_str());
    }

    #[tokio::test]
    async fn test_should_remove() {
        let table: MemTable<String> = MemTable::new();
        let _ = table.insert("id1", &"row1".to_string()).expect("should insert");
        assert_eq!(1, table.remove("id1").expect("should remove"));
        assert_eq!(0, table.remove("id1").expect("should remove"));
    }

    #[tokio::test]
    async fn test_should_sort_rows() {
        let table: MemTable<String> = MemTable::new();
        let _ = table.insert("id2", &"row2".to_string()).expect("should insert");
        let _ = table.insert("id1", &"row1".to_string()).expect("should insert");
        let ids: Vec<String> = table.sorted_rows().iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(vec!["id1".to_string(), "id2".to_string()], ids);
    }

    #[tokio::test]
    async fn test_should_match_predicate() {
        let entity = HashMap::from([("name".to_string(), "ana".to_string())]);
        assert!(matches_predicate(&entity, &HashMap::from(
            [("name".to_string(), "ana".to_string())])).expect("should match"));
        assert!(!matches_predicate(&entity, &HashMap::from(
            [("name".to_string(), "carlos".to_string())])).expect("should match"));
        assert!(!matches_predicate(&entity, &HashMap::from(
            [("other".to_string(), "ana".to_string())])).expect("should match"));
    }

    #[tokio::test]
    async fn test_should_slice_page() {
        let rows = vec![1, 2, 3, 4, 5];
        let first = to_page(rows.clone(), None, 2);
        assert_eq!(vec![1, 2], first.records);
        assert_eq!(Some("2".to_string()), first.next_page);
        let last = to_page(rows, Some("4"), 2);
        assert_eq!(vec![5], last.records);
        assert_eq!(None, last.next_page);
    }

    #[tokio::test]
    async fn test_should_share_attached_table() {
        delete_table("store_test_shared");
        let first: MemTable<String> = attach_table("store_test_shared");
        let second: MemTable<String> = attach_table("store_test_shared");
        let _ = first.insert("id1", &"row1".to_string()).expect("should insert");
        assert_eq!("row1", second.get("id1").expect("should get").as_str());
        delete_table("store_test_shared");
    }
}
