//! Persistence interface for short links and tag activity.

use crate::domain::entities::{Link, ShortCodeData, TagActivity};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for short links keyed by their unique `code`.
///
/// Not-found is an expected outcome and is reported through `Option`, zero
/// counts, or [`AppError::LinkNotFound`]; every other failure is
/// [`AppError::StoreFailure`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkStore`] - process-local map
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts a link whose code is not yet taken.
    ///
    /// The insert is atomic: if another record already holds `link.code`, nothing
    /// is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code is already in use.
    async fn create(&self, link: Link) -> Result<Link, AppError>;

    /// Finds a link by its code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns every stored link, oldest first.
    async fn find_all(&self) -> Result<Vec<Link>, AppError>;

    /// Replaces the record stored under `code` with `link`.
    ///
    /// `link.code` may differ from `code`, in which case the record moves to
    /// the new key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if nothing is stored under `code`.
    /// Returns [`AppError::CodeConflict`] if `link.code` belongs to another record.
    async fn update(&self, code: &str, link: Link) -> Result<Link, AppError>;

    /// Deletes the link stored under `code`, returning how many records were removed.
    async fn delete(&self, code: &str) -> Result<u64, AppError>;

    /// Adds one to `total_clicks` and refreshes `updated_at`.
    ///
    /// Returns the number of records modified (0 when the code is unknown).
    async fn increment_clicks(&self, code: &str) -> Result<u64, AppError>;

    /// Appends a `{code, now}` entry to the activity list of `data.tag`.
    ///
    /// The tag's list is created on first use. Returns the number of entries
    /// appended (0 when `data` carries no tag).
    async fn add_tag_activity(&self, data: &ShortCodeData) -> Result<u64, AppError>;

    /// Returns the activity recorded under `tag`, in append order.
    async fn find_tag_activity(&self, tag: &str) -> Result<Vec<TagActivity>, AppError>;

    /// Returns `true` if a link is stored under `code`.
    async fn code_in_use(&self, code: &str) -> Result<bool, AppError>;
}
