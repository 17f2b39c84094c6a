use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // Checkout was attempted while the book is not available for circulation.
    BookUnavailable {
        message: String,
    },
    // Return was attempted on a loan that has already been closed.
    AlreadyReturned {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
}

impl LibraryError {
    pub fn book_unavailable(message: &str) -> LibraryError {
        LibraryError::BookUnavailable { message: message.to_string() }
    }

    pub fn already_returned(message: &str) -> LibraryError {
        LibraryError::AlreadyReturned { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code, retryable }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::BookUnavailable { .. } => { false }
            LibraryError::AlreadyReturned { .. } => { false }
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { retryable, .. } => { *retryable }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::BookUnavailable { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyReturned { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
        }
    }
}

/// A specialized Result type for the library domain.
pub type LibraryResult<T> = Result<T, LibraryError>;

// It defines abstraction for paginated result
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The page number or token
    pub page: Option<String>,
    // page size
    pub page_size: usize,
    // Next page if available
    pub next_page: Option<String>,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: Option<&str>, page_size: usize,
                      next_page: Option<String>, records: Vec<T>) -> Self {
        PaginatedResult {
            page: page.map(str::to_string),
            page_size,
            next_page,
            records,
        }
    }
}


#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum BookStatus {
    Available,
    CheckedOut,
    Deleted,
    Unknown,
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Available" => BookStatus::Available,
            "CheckedOut" => BookStatus::CheckedOut,
            "Deleted" => BookStatus::Deleted,
            _ => BookStatus::Unknown,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::CheckedOut => write!(f, "CheckedOut"),
            BookStatus::Deleted => write!(f, "Deleted"),
            BookStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum LoanStatus {
    CheckedOut,
    Returned,
}

impl From<String> for LoanStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "CheckedOut" => LoanStatus::CheckedOut,
            "Returned" => LoanStatus::Returned,
            _ => LoanStatus::CheckedOut,
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanStatus::CheckedOut => write!(f, "CheckedOut"),
            LoanStatus::Returned => write!(f, "Returned"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum FinePolicyKind {
    Standard,
    Discounted,
    Waived,
}

impl From<String> for FinePolicyKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Standard" => FinePolicyKind::Standard,
            "Discounted" => FinePolicyKind::Discounted,
            "Waived" => FinePolicyKind::Waived,
            _ => FinePolicyKind::Standard,
        }
    }
}

impl Display for FinePolicyKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FinePolicyKind::Standard => write!(f, "Standard"),
            FinePolicyKind::Discounted => write!(f, "Discounted"),
            FinePolicyKind::Waived => write!(f, "Waived"),
        }
    }
}
