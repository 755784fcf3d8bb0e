//! Public short link resolution.
//!
//! Unlike the management API, failures here are rendered as HTML pages for
//! people following a link in a browser.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::error;

use crate::domain::entities::ShortCodeData;
use crate::error::AppError;
use crate::state::AppState;

/// Page shown when a short code does not exist.
#[derive(Template, WebTemplate)]
#[template(path = "not-found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}

/// Page shown when the store could not be reached.
#[derive(Template, WebTemplate)]
#[template(path = "server-error.html")]
pub struct ServerErrorTemplate {}

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}[/{tag}]`
///
/// # Request Flow
///
/// 1. Split the path into code and optional tag
/// 2. Look up the link
/// 3. Count the click and record tag activity (failures are only logged)
/// 4. Return 307 Temporary Redirect to the original URL
///
/// # Errors
///
/// Renders `templates/not-found.html` with 404 for unknown codes and
/// `templates/server-error.html` with 500 when the lookup fails.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Response {
    let data = ShortCodeData::from_path(&path);

    match state.resolver_service.resolve(&data).await {
        Ok(link) => Redirect::temporary(&link.original_url).into_response(),
        Err(AppError::LinkNotFound { code }) => {
            (StatusCode::NOT_FOUND, NotFoundTemplate { code }).into_response()
        }
        Err(e) => {
            error!(code = %data.code, error = %e, "failed to resolve short link");
            (StatusCode::INTERNAL_SERVER_ERROR, ServerErrorTemplate {}).into_response()
        }
    }
}

/// Redirects the bare domain to the configured home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.home_url)
}

/// `GET /favicon.ico`, answered without touching the store.
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// `HEAD` on redirect paths. Answering it with the `GET` handler would count a click.
pub async fn method_not_allowed_handler() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
