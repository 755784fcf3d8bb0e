//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, ShortCodeData, TagActivity, timestamp_now};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

const LINK_COLUMNS: &str = "short_url, code, custom_code, original_url, total_clicks, \
                            created_by, created_at, updated_at";

/// PostgreSQL-backed link store.
///
/// `links.code` is the primary key, so uniqueness holds even when two requests
/// race past the service-level existence check.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn create(&self, link: Link) -> Result<Link, AppError> {
        let inserted = sqlx::query_as::<_, Link>(&format!(
            r#"
            INSERT INTO links ({LINK_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (code) DO NOTHING
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(&link.short_url)
        .bind(&link.code)
        .bind(&link.custom_code)
        .bind(&link.original_url)
        .bind(link.total_clicks)
        .bind(&link.created_by)
        .bind(link.created_at)
        .bind(link.updated_at)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| AppError::store("insert link", e))?;

        inserted.ok_or_else(|| AppError::conflict(link.code))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| AppError::store("find link", e))
    }

    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY created_at, code"
        ))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| AppError::store("find all links", e))
    }

    async fn update(&self, code: &str, link: Link) -> Result<Link, AppError> {
        let updated = sqlx::query_as::<_, Link>(&format!(
            r#"
            UPDATE links
            SET code = $2, custom_code = $3, short_url = $4, original_url = $5, updated_at = $6
            WHERE code = $1
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(code)
        .bind(&link.code)
        .bind(&link.custom_code)
        .bind(&link.short_url)
        .bind(&link.original_url)
        .bind(link.updated_at)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict(link.code.clone())
            } else {
                AppError::store("update link", e)
            }
        })?;

        updated.ok_or_else(|| AppError::not_found(code))
    }

    async fn delete(&self, code: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| AppError::store("delete link", e))?;

        Ok(result.rows_affected())
    }

    async fn increment_clicks(&self, code: &str) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE links SET total_clicks = total_clicks + 1, updated_at = $2 WHERE code = $1",
        )
        .bind(code)
        .bind(timestamp_now())
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| AppError::store("increment clicks", e))?;

        Ok(result.rows_affected())
    }

    async fn add_tag_activity(&self, data: &ShortCodeData) -> Result<u64, AppError> {
        let Some(tag) = &data.tag else {
            return Ok(0);
        };

        let result =
            sqlx::query("INSERT INTO tag_activity (tag, short_code, created_at) VALUES ($1, $2, $3)")
                .bind(tag)
                .bind(&data.code)
                .bind(timestamp_now())
                .execute(self.pool.as_ref())
                .await
                .map_err(|e| AppError::store("add tag activity", e))?;

        Ok(result.rows_affected())
    }

    async fn find_tag_activity(&self, tag: &str) -> Result<Vec<TagActivity>, AppError> {
        sqlx::query_as::<_, TagActivity>(
            "SELECT short_code, created_at FROM tag_activity WHERE tag = $1 ORDER BY id",
        )
        .bind(tag)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| AppError::store("find tag activity", e))
    }

    async fn code_in_use(&self, code: &str) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM links WHERE code = $1)")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| AppError::store("check code in use", e))
    }
}
