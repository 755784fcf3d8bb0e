//! API route configuration.
//!
//! All API endpoints require the `key` header checked by
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All management routes.
///
/// # Endpoints
///
/// - `POST   /api/urls`                 - Create a short link
/// - `GET    /api/urls`                 - List all links (also `/api/urls/`)
/// - `GET    /api/urls/{code}[/{tag}]`  - Fetch one link
/// - `PUT    /api/urls/{code}`          - Update destination and/or code
/// - `DELETE /api/urls/{code}`          - Delete a link, responds with the count
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/urls",
            get(list_links_handler).post(create_link_handler),
        )
        .route(
            "/api/urls/",
            get(list_links_handler).post(create_link_handler),
        )
        .route(
            "/api/urls/{*path}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
}
