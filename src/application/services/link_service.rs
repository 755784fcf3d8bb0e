//! Link creation, retrieval, update and deletion.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::application::services::deadline::with_deadline;
use crate::domain::entities::{Link, LinkPatch};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::validate_custom_code;
use crate::utils::url_validator::validate_original_url;

/// How many generated codes to try before giving up on a create.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Parameters shared by the link services.
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Prefix for short URLs, without a trailing `/`.
    pub base_url: String,
    /// Attribution stamped into `created_by`.
    pub created_by: String,
    /// Upper bound for every store call.
    pub store_timeout: Duration,
}

/// Service for managing short links through the management API.
///
/// Enforces the code rules: custom codes are validated and checked for
/// collisions before anything is written, generated codes are retried when
/// the store reports a collision.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    settings: LinkSettings,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(store: Arc<dyn LinkStore>, settings: LinkSettings) -> Self {
        Self { store, settings }
    }

    async fn call<T>(
        &self,
        operation: &str,
        fut: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        with_deadline(self.settings.store_timeout, operation, fut).await
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - target URL; must be absolute
    /// - `custom_code` - optional caller-chosen code; empty means "generate one"
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`AppError::MissingField`] if `original_url` is absent or empty
    /// - [`AppError::InvalidUrl`] if `original_url` is not absolute
    /// - [`AppError::InvalidCode`] if `custom_code` cannot be routed
    /// - [`AppError::CodeConflict`] if `custom_code` is taken
    /// - [`AppError::StoreFailure`] on store errors, or when every generated
    ///   code collided
    pub async fn create_link(
        &self,
        original_url: Option<String>,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let original_url = original_url
            .filter(|url| !url.is_empty())
            .ok_or(AppError::MissingField {
                field: "originalUrl",
            })?;
        validate_original_url(&original_url)?;

        let custom_code = custom_code.filter(|code| !code.is_empty());
        if let Some(code) = &custom_code {
            validate_custom_code(code)?;
            self.ensure_code_available(code).await?;
        }

        let draft = Link::draft(original_url, custom_code, &self.settings.created_by);
        let is_custom = !draft.custom_code.is_empty();

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let mut link = draft.clone();
            link.assign_code(&self.settings.base_url);

            match self.call("create link", self.store.create(link)).await {
                Ok(created) => {
                    info!(code = %created.code, custom = is_custom, "short link created");
                    return Ok(created);
                }
                Err(AppError::CodeConflict { code }) if !is_custom => {
                    warn!(attempt, code = %code, "generated code collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::store(
            "create link",
            anyhow::anyhow!("no unique code after {MAX_GENERATION_ATTEMPTS} attempts"),
        ))
    }

    /// Returns every stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreFailure`] on store errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.call("find all links", self.store.find_all()).await
    }

    /// Retrieves a link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if no link has this code.
    /// Returns [`AppError::StoreFailure`] on store errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.call("find link", self.store.find_by_code(code))
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Applies a partial update to the link stored under `code`.
    ///
    /// A new custom code moves the link to that code and re-derives its short
    /// URL. Nothing is written if any check fails. `updated_at` is refreshed
    /// even when the patch is empty.
    ///
    /// # Errors
    ///
    /// - [`AppError::LinkNotFound`] if no link has this code
    /// - [`AppError::InvalidUrl`] / [`AppError::InvalidCode`] for bad patch values
    /// - [`AppError::CodeConflict`] if the new custom code is taken
    /// - [`AppError::StoreFailure`] on store errors
    pub async fn update_link(&self, code: &str, patch: LinkPatch) -> Result<Link, AppError> {
        let mut link = self.get_link(code).await?;

        let original_url = patch.original_url.filter(|url| !url.is_empty());
        if let Some(url) = &original_url {
            validate_original_url(url)?;
        }

        let new_code = patch
            .custom_code
            .filter(|custom| !custom.is_empty() && custom != &link.code);
        if let Some(new_code) = new_code {
            validate_custom_code(&new_code)?;
            self.ensure_code_available(&new_code).await?;

            link.custom_code = new_code;
            link.assign_code(&self.settings.base_url);
        }

        if let Some(url) = original_url {
            link.original_url = url;
        }
        link.touch();

        let updated = self.call("update link", self.store.update(code, link)).await?;
        info!(code, new_code = %updated.code, "short link updated");
        Ok(updated)
    }

    /// Deletes the link stored under `code`.
    ///
    /// Returns the number of links removed; an unknown code yields 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreFailure`] on store errors.
    pub async fn delete_link(&self, code: &str) -> Result<u64, AppError> {
        let deleted = self.call("delete link", self.store.delete(code)).await?;
        info!(code, deleted, "short link delete requested");
        Ok(deleted)
    }

    /// Fails with [`AppError::CodeConflict`] if `code` is already stored.
    ///
    /// This is a read ahead of the write; the store's own uniqueness check
    /// still settles races between concurrent requests.
    async fn ensure_code_available(&self, code: &str) -> Result<(), AppError> {
        if self
            .call("check code in use", self.store.code_in_use(code))
            .await?
        {
            return Err(AppError::conflict(code));
        }
        Ok(())
    }
}
