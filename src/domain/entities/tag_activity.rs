//! Tag activity entries recorded when a tagged short link is followed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One use of a short link under a tag.
///
/// Entries are append-only and grouped by tag code in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TagActivity {
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl TagActivity {
    pub fn new(short_code: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            short_code: short_code.into(),
            created_at,
        }
    }
}
