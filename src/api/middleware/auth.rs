//! API key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Request header carrying the API key.
pub const API_KEY_HEADER: &str = "key";

/// Authenticates requests using the shared API key.
///
/// # Header Format
///
/// ```text
/// key: <api key>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, not valid UTF-8, or
/// does not match the configured key. The handler is not invoked.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/urls", get(list_links_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    st.auth_service.authenticate(provided)?;

    Ok(next.run(req).await)
}
