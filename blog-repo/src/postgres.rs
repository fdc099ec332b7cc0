//! PostgreSQL repository adapter.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use blog_types::{Comment, CommentRepository, NewComment, Pagination, PostId, RepoError};

use crate::config::DbConfig;
use crate::types::{COMMENT_COLUMNS, DbComment, db_error, to_db_id};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL comment repository.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_comments_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository from a connection URL, with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Creates a new PostgreSQL repository from environment-provided settings.
    pub async fn from_config(config: &DbConfig) -> anyhow::Result<Self> {
        let options = config.pg_connect_options()?;
        tracing::info!(
            host = %config.host,
            port = %config.port,
            dbname = %config.dbname,
            "connecting to postgres"
        );
        let pool = PgPool::connect_with(options).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CommentRepository for PostgresRepo {
    async fn all_comments_by_post_id(
        &self,
        page: Pagination,
        post_id: PostId,
    ) -> Result<Vec<Comment>, RepoError> {
        let rows: Vec<DbComment> = sqlx::query_as(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE post_id = $1 \
             ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
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
        let now = Utc::now();

        let row: DbComment = sqlx::query_as(&format!(
            "INSERT INTO comments (body, post_id, user_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $4) RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(comment.body())
        .bind(to_db_id(comment.post_id().get())?)
        .bind(to_db_id(comment.user_id().get())?)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        row.into_domain()
    }
}
