//! Deadline enforcement for store calls.

use std::future::Future;
use std::time::Duration;

use crate::error::AppError;

/// Awaits a store operation, giving up after `timeout`.
///
/// On expiry the operation's future is dropped, which cancels it, and a
/// [`AppError::StoreFailure`] naming `operation` is returned.
pub async fn with_deadline<T, F>(timeout: Duration, operation: &str, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(elapsed) => {
            tracing::warn!(operation, ?timeout, "store call exceeded its deadline");
            Err(AppError::store(format!("{operation} timed out"), elapsed))
        }
    }
}
