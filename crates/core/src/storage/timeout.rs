//! Bounded-duration scopes for store operations.

use std::{future::Future, time::Duration};

use super::{RepositoryError, Result};

/// Upper bound applied to every individual store operation.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs `fut` for at most `timeout`.
///
/// The inner future is dropped (and with it the in-flight store call) when
/// the deadline passes. Dropping the returned future cancels the operation
/// as well, so whichever bound the caller hits first wins.
pub async fn with_timeout<T, F>(operation: &'static str, timeout: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(RepositoryError::Timeout { operation }),
    }
}
