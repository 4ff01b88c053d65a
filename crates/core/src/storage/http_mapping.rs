//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 400 (Bad Request)
/// - `Timeout` -> 500 (Internal Server Error)
/// - `ConnectionFailed` -> 500 (Internal Server Error)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
///
/// A missing note is reported as a client error: the caller supplied an ID
/// that does not name a note. Every store-side failure, timeouts included,
/// is an opaque server error.
///
/// # Examples
///
/// ```
/// use notes_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::note_not_found("65f1c0ffee0000000000beef");
/// assert_eq!(repository_error_to_status_code(&error), 400);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 400,
        RepositoryError::Timeout { .. } => 500,
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed { .. } => 500,
        RepositoryError::Serialization(_) => 500,
    }
}
