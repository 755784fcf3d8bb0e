//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                 - Redirect to the home page (public)
//! - `GET  /favicon.ico`      - Empty response (public)
//! - `GET  /{code}[/{tag}]`   - Short link redirect (public)
//! - `/api/urls*`             - Management API (`key` header required)
//!
//! Any other method on the public paths, `HEAD` included, is answered with 405.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - API key, on the management routes only

use crate::api;
use crate::api::handlers::{
    favicon_handler, home_handler, method_not_allowed_handler, resolve_handler,
};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/", get(home_handler).head(method_not_allowed_handler))
        .route("/favicon.ico", get(favicon_handler))
        .route(
            "/{*path}",
            get(resolve_handler).head(method_not_allowed_handler),
        )
        .merge(api_router)
        .with_state(state)
        .layer(tracing::layer())
}
