//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkQuery, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str = "id, code, target, total_clicks, last_clicked, created_at, deleted";

/// PostgreSQL repository for link storage and retrieval.
///
/// Active-code uniqueness is enforced by the partial unique index
/// `links_active_code_key`; a violation surfaces as [`AppError::CodeConflict`].
/// Click recording and deletion are single conditional `UPDATE` statements.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let sql = format!(
            "INSERT INTO links (code, target) VALUES ($1, $2) RETURNING {LINK_COLUMNS}"
        );

        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(&new_link.code)
            .bind(&new_link.target)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE code = $1 AND NOT deleted");

        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn list(&self, query: LinkQuery) -> Result<Vec<Link>, AppError> {
        // strpos keeps the search literal: % and _ in user input are not wildcards
        let sql = format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM links
            WHERE NOT deleted
              AND ($1::text IS NULL OR strpos(code, $1) > 0 OR strpos(target, $1) > 0)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        );

        let links = sqlx::query_as::<_, Link>(&sql)
            .bind(query.search.as_deref())
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(links)
    }

    async fn soft_delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE links SET deleted = TRUE WHERE code = $1 AND NOT deleted")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError> {
        let target = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE links
            SET total_clicks = total_clicks + 1, last_clicked = NOW()
            WHERE code = $1 AND NOT deleted
            RETURNING target
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(target)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
