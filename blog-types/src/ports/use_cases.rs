//! Driving port: what callers such as the HTTP adapter can ask of the
//! comment service.

use crate::domain::{Comment, PostId, UserId};
use crate::dto::{CreateCommentRequest, Pagination};
use crate::error::ServiceError;

#[async_trait::async_trait]
pub trait CommentUseCases: Send + Sync + 'static {
    /// Lists a post's comments exactly as the repository returns them.
    async fn all(&self, page: Pagination, post_id: PostId) -> Result<Vec<Comment>, ServiceError>;

    /// Adds a comment written by `user_id` to `post_id`.
    async fn insert(
        &self,
        req: CreateCommentRequest,
        post_id: PostId,
        user_id: UserId,
    ) -> Result<Comment, ServiceError>;
}
