use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    BookUnavailable {
        message: String,
    },
    AlreadyReturned {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::BookUnavailable { message } => {
                CommandError::BookUnavailable { message }
            }
            LibraryError::AlreadyReturned { message } => {
                CommandError::AlreadyReturned { message }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code, retryable } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::BookUnavailable { message: "test".to_string() };
        let _ = CommandError::AlreadyReturned { message: "test".to_string() };
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None, retryable: false };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Other { message: "test".to_string(), reason_code: None };
    }

    #[tokio::test]
    async fn test_should_map_library_error() {
        assert!(matches!(CommandError::from(LibraryError::book_unavailable("test")),
                         CommandError::BookUnavailable { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::already_returned("test")),
                         CommandError::AlreadyReturned { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::not_found("test")),
                         CommandError::NotFound { message: _ }));
    }
}
