//! Comment domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ids::{CommentId, PostId, UserId};
use crate::dto::CreateCommentRequest;
use crate::error::MappingError;

/// Upper bound on the length of a comment body, counted in characters.
pub const MAX_COMMENT_BODY_CHARS: usize = 5000;

/// A comment as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    /// Unique identifier
    pub id: CommentId,
    /// Comment text
    #[schema(example = "Great post!")]
    pub body: String,
    /// Post the comment belongs to
    pub post_id: PostId,
    /// Author of the comment
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment that has been validated but not yet persisted.
///
/// The only way to build one is [`NewComment::from_request`], so the post and
/// user identifiers always come from the caller and never from client input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    body: String,
    post_id: PostId,
    user_id: UserId,
}

impl NewComment {
    /// Converts a submitted comment into its insertable shape.
    ///
    /// # Validation
    /// - Body cannot be blank
    /// - Body cannot exceed [`MAX_COMMENT_BODY_CHARS`] characters
    pub fn from_request(
        req: CreateCommentRequest,
        post_id: PostId,
        user_id: UserId,
    ) -> Result<Self, MappingError> {
        let CreateCommentRequest { body } = req;

        if body.trim().is_empty() {
            return Err(MappingError::EmptyField("body"));
        }

        let chars = body.chars().count();
        if chars > MAX_COMMENT_BODY_CHARS {
            return Err(MappingError::FieldTooLong {
                field: "body",
                max: MAX_COMMENT_BODY_CHARS,
                actual: chars,
            });
        }

        Ok(Self {
            body,
            post_id,
            user_id,
        })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Completes the comment with the values assigned by storage.
    pub fn into_comment(
        self,
        id: CommentId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Comment {
        Comment {
            id,
            body: self.body,
            post_id: self.post_id,
            user_id: self.user_id,
            created_at,
            updated_at,
        }
    }
}
