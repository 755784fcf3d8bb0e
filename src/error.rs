//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service and store layers returns [`AppError`].
//! API handlers turn it into a JSON error body with a precise status code; the
//! public resolver maps it to rendered HTML pages instead (see
//! [`crate::api::handlers::resolver`]).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description included in API error responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Why an `originalUrl` was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidUrlKind {
    /// Parsed, but has no scheme (e.g. `not-a-url`, `/path`).
    Relative,
    /// Has a scheme but no host (e.g. `mailto:someone`).
    MissingHost,
    /// Could not be parsed at all.
    Malformed,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Cannot parse Link JSON: {reason}")]
    MalformedInput { reason: String },

    #[error("\"{field}\" field required.")]
    MissingField { field: &'static str },

    #[error("{}", invalid_url_message(.url, .kind))]
    InvalidUrl { url: String, kind: InvalidUrlKind },

    #[error("Invalid code {code:?}: {reason}")]
    InvalidCode { code: String, reason: &'static str },

    #[error("code: {code:?} already in use.")]
    CodeConflict { code: String },

    #[error("Link not found: {code:?}")]
    LinkNotFound { code: String },

    #[error("Invalid API key")]
    Unauthorized,

    #[error("{context}: {source}")]
    StoreFailure {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Problem encoding response: {0}")]
    EncodingFailure(#[source] serde_json::Error),
}

fn invalid_url_message(url: &str, kind: &InvalidUrlKind) -> String {
    match kind {
        InvalidUrlKind::Relative => format!("URL: {url:?} is relative. URLs must be absolute"),
        InvalidUrlKind::MissingHost => format!("URL: {url:?} has no host"),
        InvalidUrlKind::Malformed => "Invalid URL".to_string(),
    }
}

impl AppError {
    pub fn malformed(reason: impl ToString) -> Self {
        Self::MalformedInput {
            reason: reason.to_string(),
        }
    }

    pub fn conflict(code: impl Into<String>) -> Self {
        Self::CodeConflict { code: code.into() }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::LinkNotFound { code: code.into() }
    }

    /// Wraps a backing-store error with the operation that produced it.
    pub fn store(context: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::StoreFailure {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedInput { .. }
            | AppError::MissingField { .. }
            | AppError::InvalidUrl { .. }
            | AppError::InvalidCode { .. } => StatusCode::BAD_REQUEST,
            AppError::CodeConflict { .. } => StatusCode::CONFLICT,
            AppError::LinkNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::StoreFailure { .. } | AppError::EncodingFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the client-facing error description.
    ///
    /// Server-side failures get a generic message so store internals never leak
    /// to API consumers; the full error is logged instead.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            AppError::MalformedInput { .. } => ("malformed_input", json!({})),
            AppError::MissingField { field } => ("missing_field", json!({ "field": field })),
            AppError::InvalidUrl { url, kind } => {
                let code = match kind {
                    InvalidUrlKind::Relative => "relative_url",
                    _ => "invalid_url",
                };
                (code, json!({ "url": url }))
            }
            AppError::InvalidCode { code, .. } => ("invalid_code", json!({ "code": code })),
            AppError::CodeConflict { code } => ("code_conflict", json!({ "code": code })),
            AppError::LinkNotFound { code } => ("link_not_found", json!({ "code": code })),
            AppError::Unauthorized => ("unauthorized", json!({})),
            AppError::StoreFailure { .. } => ("store_failure", json!({})),
            AppError::EncodingFailure(_) => ("encoding_failure", json!({})),
        };

        let message = match self {
            AppError::StoreFailure { .. } => "Internal store error".to_string(),
            AppError::EncodingFailure(_) => "Problem encoding response".to_string(),
            other => other.to_string(),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::store("database error", e)
    }
}
