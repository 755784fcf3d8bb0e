//! Handlers for the link management endpoints under `/api/urls`.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::dto::{CreateLinkRequest, UpdateLinkRequest};
use crate::api::extractors::ApiJson;
use crate::domain::entities::ShortCodeData;
use crate::error::AppError;
use crate::state::AppState;

/// Serializes `body` into a JSON response with the given status.
///
/// Serialization problems surface as [`AppError::EncodingFailure`].
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, AppError> {
    let bytes = serde_json::to_vec(body).map_err(AppError::EncodingFailure)?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com/some/long/path",
///   "customCode": "launch"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored link.
///
/// # Errors
///
/// - 400 for an unparsable body, missing or relative `originalUrl`, or an
///   unusable `customCode`
/// - 409 if `customCode` is already taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateLinkRequest>,
) -> Result<Response, AppError> {
    let link = state
        .link_service
        .create_link(payload.original_url, payload.custom_code)
        .await?;

    json_response(StatusCode::CREATED, &link)
}

/// Lists every stored link.
///
/// # Endpoint
///
/// `GET /api/urls` (also `/api/urls/`)
///
/// An empty store yields `[]`.
pub async fn list_links_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let links = state.link_service.list_links().await?;
    json_response(StatusCode::OK, &links)
}

/// Fetches one link.
///
/// # Endpoint
///
/// `GET /api/urls/{code}[/{tag}]`
///
/// A trailing tag segment is accepted and ignored. An empty code segment
/// (`/api/urls//`) lists all links.
///
/// # Errors
///
/// Returns 404 with the code in the message if no link matches.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let data = ShortCodeData::from_path(&path);
    if data.is_empty() {
        let links = state.link_service.list_links().await?;
        return json_response(StatusCode::OK, &links);
    }

    let link = state.link_service.get_link(&data.code).await?;
    json_response(StatusCode::OK, &link)
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PUT /api/urls/{code}`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com/new",   // optional
///   "customCode": "new-code"                    // optional, moves the link
/// }
/// ```
///
/// # Errors
///
/// - 400 for invalid values
/// - 404 if the link does not exist
/// - 409 if the new code is taken
pub async fn update_link_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    ApiJson(payload): ApiJson<UpdateLinkRequest>,
) -> Result<Response, AppError> {
    let data = ShortCodeData::from_path(&path);
    let link = state
        .link_service
        .update_link(&data.code, payload.into())
        .await?;

    json_response(StatusCode::OK, &link)
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// # Response
///
/// `200 OK` with the number of deleted links as plain text (`1` or `0`).
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<String, AppError> {
    let data = ShortCodeData::from_path(&path);
    let deleted = state.link_service.delete_link(&data.code).await?;
    Ok(deleted.to_string())
}
