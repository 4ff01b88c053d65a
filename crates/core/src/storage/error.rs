use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Every store failure carries the intent of the operation that failed, so
/// callers can log a meaningful cause without inspecting driver errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{operation} timed out")]
    Timeout { operation: &'static str },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("{operation} failed: {message}")]
    QueryFailed {
        operation: &'static str,
        message: String,
    },
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Shorthand for a missing note.
    pub fn note_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Note",
            id: id.to_string(),
        }
    }

    /// Returns true when the error means "no document matched".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
