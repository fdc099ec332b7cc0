//! # Blog Types
//!
//! Domain types and port traits for the blog comment service.
//! This crate has no IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the innermost core of the hexagonal architecture:
//! - `domain/` - Comment model and identifiers
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Mapping, repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Comment, CommentId, MAX_COMMENT_BODY_CHARS, NewComment, PostId, UserId};
pub use dto::*;
pub use error::{AppError, MappingError, RepoError, ServiceError};
pub use ports::{CommentRepository, CommentUseCases};
