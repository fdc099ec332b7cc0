//! Database row types shared by the SQLite and PostgreSQL adapters.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use blog_types::{Comment, CommentId, PostId, RepoError, UserId};

/// Column list selected for every comment query.
pub const COMMENT_COLUMNS: &str = "id, body, post_id, user_id, created_at, updated_at";

/// Comment row from database.
#[derive(Debug, FromRow)]
pub struct DbComment {
    pub id: i64,
    pub body: String,
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbComment {
    pub fn into_domain(self) -> Result<Comment, RepoError> {
        Ok(Comment {
            id: CommentId::new(from_db_id("id", self.id)?),
            body: self.body,
            post_id: PostId::new(from_db_id("post_id", self.post_id)?),
            user_id: UserId::new(from_db_id("user_id", self.user_id)?),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Converts an identifier into the signed integer type the columns use.
pub fn to_db_id(raw: u64) -> Result<i64, RepoError> {
    i64::try_from(raw).map_err(|_| RepoError::Conflict(format!("Identifier out of range: {raw}")))
}

fn from_db_id(column: &str, raw: i64) -> Result<u64, RepoError> {
    u64::try_from(raw).map_err(|_| RepoError::InvalidRow(format!("Negative {column}: {raw}")))
}

pub fn db_error(err: sqlx::Error) -> RepoError {
    RepoError::Database(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64) -> DbComment {
        let now = Utc::now();
        DbComment {
            id,
            body: "hello".into(),
            post_id: 5,
            user_id: 9,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_into_domain() {
        let comment = row(1).into_domain().unwrap();
        assert_eq!(comment.id, CommentId::new(1));
        assert_eq!(comment.post_id, PostId::new(5));
        assert_eq!(comment.user_id, UserId::new(9));
    }

    #[test]
    fn test_negative_id_is_invalid_row() {
        assert!(matches!(row(-1).into_domain(), Err(RepoError::InvalidRow(_))));
    }

    #[test]
    fn test_to_db_id_rejects_overflow() {
        assert_eq!(to_db_id(42).unwrap(), 42);
        assert!(matches!(to_db_id(u64::MAX), Err(RepoError::Conflict(_))));
    }
}
