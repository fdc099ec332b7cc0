//! SQLite repository adapter.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use blog_types::{Comment, CommentRepository, NewComment, Pagination, PostId, RepoError};

use crate::types::{COMMENT_COLUMNS, DbComment, db_error, to_db_id};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite comment repository, used for local runs and tests.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the database schema (for testing with existing pool).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_comments.sql");
        for statement in ddl.split(';') {
            let stmt = statement.trim();
            if !stmt.is_empty() {
                sqlx::query(stmt)
                    .execute(&self.pool)
                    .await
                    .map_err(db_error)?;
            }
        }

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CommentRepository for SqliteRepo {
    async fn all_comments_by_post_id(
        &self,
        page: Pagination,
        post_id: PostId,
    ) -> Result<Vec<Comment>, RepoError> {
        let rows: Vec<DbComment> = sqlx::query_as(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE post_id = ? \
             ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
        ))
        .bind(to_db_id(post_id.get())?)
        .bind(i64::from(page.limit))
        .bind(i64::from(page.offset))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(DbComment::into_domain).collect()
    }

    async fn insert(&self, comment: NewComment) -> Result<Comment, RepoError> {
        // Fixed-width RFC 3339 so text ordering matches time ordering.
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let row: DbComment = sqlx::query_as(&format!(
            "INSERT INTO comments (body, post_id, user_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(comment.body())
        .bind(to_db_id(comment.post_id().get())?)
        .bind(to_db_id(comment.user_id().get())?)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        row.into_domain()
    }
}
