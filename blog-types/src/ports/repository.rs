//! Repository port trait.
//!
//! This is the primary driven port in our hexagonal architecture.
//! Adapters (Postgres, SQLite, in-memory mocks) implement this trait.

use crate::domain::{Comment, NewComment, PostId};
use crate::dto::Pagination;
use crate::error::RepoError;

/// Persistence operations for comments.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait::async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    /// Lists the comments of a post, newest first, within the given window.
    async fn all_comments_by_post_id(
        &self,
        page: Pagination,
        post_id: PostId,
    ) -> Result<Vec<Comment>, RepoError>;

    /// Stores a comment and returns it with its id and timestamps assigned.
    async fn insert(&self, comment: NewComment) -> Result<Comment, RepoError>;
}
