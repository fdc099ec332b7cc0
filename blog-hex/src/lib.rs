//! # Blog Hex
//!
//! Application service layer and HTTP adapter for the blog comment service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (maps submissions, delegates to the repository)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by the HTTP adapter
//!
//! The service is generic over `R: CommentRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::CommentService;
