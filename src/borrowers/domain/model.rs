use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::borrowers::domain::Borrower;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BorrowerEntity abstracts a registered library member who can check out books.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BorrowerEntity {
    pub borrower_id: String,
    pub version: i64,
    pub name: String,
    pub email: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BorrowerEntity {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            borrower_id: Uuid::new_v4().to_string(),
            version: 0,
            name: name.to_string(),
            email: email.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BorrowerEntity {
    fn id(&self) -> String {
        self.borrower_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Borrower for BorrowerEntity {
    fn recipient(&self) -> String {
        self.name.to_string()
    }
}
