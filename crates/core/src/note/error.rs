use thiserror::Error;

/// Errors that can occur when parsing a note identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteIdError {
    #[error("Invalid note ID: {0}")]
    Malformed(String),
}
