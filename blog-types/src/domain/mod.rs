//! Domain models for the blog comment service.

pub mod comment;
pub mod ids;

pub use comment::{Comment, MAX_COMMENT_BODY_CHARS, NewComment};
pub use ids::{CommentId, PostId, UserId};
