//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod auth;
mod handlers;
mod server;

pub use auth::{CurrentUser, USER_ID_HEADER};
pub use handlers::{ApiError, AppState};
pub use server::HttpServer;
