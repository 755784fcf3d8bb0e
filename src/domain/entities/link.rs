//! Link entity representing a short-link record.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Attribution used when no other creator is configured.
pub const DEFAULT_CREATED_BY: &str = "system";

/// A short link and its bookkeeping.
///
/// `code` is the routing key and is unique within a store. After
/// [`Link::assign_code`] has run, `code` and `custom_code` always agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub short_url: String,
    pub code: String,
    pub custom_code: String,
    pub original_url: String,
    pub total_clicks: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates an unsaved link with no code assigned yet.
    ///
    /// An empty `custom_code` means "generate one" once
    /// [`assign_code`](Self::assign_code) runs.
    pub fn draft(
        original_url: impl Into<String>,
        custom_code: Option<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = timestamp_now();
        Self {
            short_url: String::new(),
            code: String::new(),
            custom_code: custom_code.unwrap_or_default(),
            original_url: original_url.into(),
            total_clicks: 0,
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Assigns the routing code and derives the short URL.
    ///
    /// A non-empty `custom_code` becomes the code, so calling this twice with
    /// the same custom code is a no-op. Otherwise a fresh code is generated and
    /// mirrored into `custom_code`.
    ///
    /// `base_url` must not end with `/`.
    pub fn assign_code(&mut self, base_url: &str) {
        if self.custom_code.is_empty() {
            self.custom_code = generate_code();
        }
        self.code = self.custom_code.clone();
        self.short_url = format!("{}/{}", base_url, self.code);
    }

    /// Sets `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = timestamp_now();
    }

    /// Parses a link from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MalformedInput`] if the bytes are not a Link document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(bytes).map_err(AppError::malformed)
    }

    /// Serializes the link to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EncodingFailure`] if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>, AppError> {
        serde_json::to_vec(self).map_err(AppError::EncodingFailure)
    }
}

/// Current time at microsecond precision.
///
/// PostgreSQL `timestamptz` keeps microseconds, so stamping at that precision
/// keeps a stored record equal to the one returned at creation.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
