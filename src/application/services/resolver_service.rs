//! Short link resolution for the public redirect path.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::application::services::deadline::with_deadline;
use crate::domain::entities::{Link, ShortCodeData};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Looks up short links for redirection and records their use.
///
/// Click counting and tag activity are bookkeeping: their failures are logged
/// and never prevent the redirect.
pub struct ResolverService {
    store: Arc<dyn LinkStore>,
    store_timeout: Duration,
}

impl ResolverService {
    pub fn new(store: Arc<dyn LinkStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    async fn call<T>(
        &self,
        operation: &str,
        fut: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        with_deadline(self.store_timeout, operation, fut).await
    }

    /// Resolves `data.code` to its link and records the click.
    ///
    /// On success the link's click counter has been incremented and, when
    /// `data.tag` is set, a tag activity entry appended (both best-effort).
    /// The returned link is the record as it was looked up.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if no link has this code.
    /// Returns [`AppError::StoreFailure`] if the lookup itself fails.
    pub async fn resolve(&self, data: &ShortCodeData) -> Result<Link, AppError> {
        let link = self
            .call("find link", self.store.find_by_code(&data.code))
            .await?
            .ok_or_else(|| AppError::not_found(&data.code))?;

        match self
            .call("increment clicks", self.store.increment_clicks(&data.code))
            .await
        {
            Ok(0) => warn!(code = %data.code, "link vanished before its click was counted"),
            Ok(_) => {}
            Err(e) => warn!(code = %data.code, error = %e, "could not update click count"),
        }

        if let Some(tag) = &data.tag {
            if let Err(e) = self
                .call("add tag activity", self.store.add_tag_activity(data))
                .await
            {
                warn!(code = %data.code, tag = %tag, error = %e, "could not record tag activity");
            }
        }

        debug!(code = %data.code, target = %link.original_url, "short link resolved");
        Ok(link)
    }
}
