//! MongoDB error mapping.
//!
//! Maps driver errors to `RepositoryError` from `notes_core::storage`,
//! annotated with the operation that failed.

use mongodb::error::{Error, ErrorKind};
use notes_core::storage::RepositoryError;

/// Maps a driver error to a RepositoryError.
///
/// # Error Mapping
///
/// - Server selection, DNS, pool and I/O errors → `RepositoryError::ConnectionFailed`
/// - BSON (de)serialization errors → `RepositoryError::Serialization`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_mongo_error(err: Error, operation: &'static str) -> RepositoryError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Io(_) => RepositoryError::ConnectionFailed(format!("{operation}: {err}")),

        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            RepositoryError::Serialization(format!("{operation}: {err}"))
        }

        _ => RepositoryError::QueryFailed {
            operation,
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    use crate::storage::mongo::conversions::NoteDocument;

    #[test]
    fn test_io_error_is_connection_failed() {
        let err = Error::from(std::io::Error::other("connection reset"));

        match map_mongo_error(err, "list notes") {
            RepositoryError::ConnectionFailed(message) => {
                assert!(message.starts_with("list notes: "), "{message}");
                assert!(message.contains("connection reset"), "{message}");
            }
            other => panic!("Expected ConnectionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_bson_error_is_serialization() {
        let bson_err = bson::from_document::<NoteDocument>(doc! { "title": 1 }).unwrap_err();
        let err = Error::from(bson_err);

        match map_mongo_error(err, "find note") {
            RepositoryError::Serialization(message) => {
                assert!(message.starts_with("find note: "), "{message}");
            }
            other => panic!("Expected Serialization, got {other:?}"),
        }
    }

    #[test]
    fn test_other_errors_are_query_failed_with_operation() {
        let err = Error::custom("write conflict");

        let mapped = map_mongo_error(err, "update note");

        assert!(
            matches!(
                mapped,
                RepositoryError::QueryFailed {
                    operation: "update note",
                    ..
                }
            ),
            "{mapped:?}"
        );
    }
}
