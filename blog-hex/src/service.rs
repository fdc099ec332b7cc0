//! Comment Application Service
//!
//! Converts submissions into storable comments and delegates to the
//! repository port. Contains NO infrastructure logic.

use async_trait::async_trait;

use blog_types::{
    Comment, CommentRepository, CommentUseCases, CreateCommentRequest, NewComment, Pagination,
    PostId, ServiceError, UserId,
};

/// Application service for comment operations.
///
/// Generic over `R: CommentRepository` - the adapter is injected at compile time,
/// so tests can run against an in-memory repository.
pub struct CommentService<R: CommentRepository> {
    repo: R,
}

impl<R: CommentRepository> CommentService<R> {
    /// Creates a new comment service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}

#[async_trait]
impl<R: CommentRepository> CommentUseCases for CommentService<R> {
    /// Lists the comments of a post.
    ///
    /// The window has already been validated by the caller; the repository
    /// result is returned as-is.
    #[tracing::instrument(skip(self))]
    async fn all(&self, page: Pagination, post_id: PostId) -> Result<Vec<Comment>, ServiceError> {
        let comments = self.repo.all_comments_by_post_id(page, post_id).await?;
        tracing::debug!(count = comments.len(), "listed comments");
        Ok(comments)
    }

    /// Adds a comment to a post.
    ///
    /// `post_id` and `user_id` come from the trusted caller, never from `req`.
    #[tracing::instrument(skip(self, req))]
    async fn insert(
        &self,
        req: CreateCommentRequest,
        post_id: PostId,
        user_id: UserId,
    ) -> Result<Comment, ServiceError> {
        let new_comment = NewComment::from_request(req, post_id, user_id)?;
        let comment = self.repo.insert(new_comment).await?;
        tracing::debug!(comment_id = %comment.id, "inserted comment");
        Ok(comment)
    }
}
