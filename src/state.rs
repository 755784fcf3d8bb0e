//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, LinkSettings, ResolverService};
use crate::domain::repositories::LinkStore;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub resolver_service: Arc<ResolverService>,
    pub auth_service: Arc<AuthService>,
    /// Destination for `GET /`.
    pub home_url: Arc<str>,
}

impl AppState {
    /// Wires all services around one link store.
    pub fn new(
        store: Arc<dyn LinkStore>,
        settings: LinkSettings,
        api_key: impl Into<String>,
        home_url: impl Into<String>,
    ) -> Self {
        let resolver_service = ResolverService::new(store.clone(), settings.store_timeout);
        let link_service = LinkService::new(store, settings);

        Self {
            link_service: Arc::new(link_service),
            resolver_service: Arc::new(resolver_service),
            auth_service: Arc::new(AuthService::new(api_key)),
            home_url: Arc::from(home_url.into()),
        }
    }
}
