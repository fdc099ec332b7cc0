//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use blog_types::domain::{Comment, CommentId, PostId, UserId};
use blog_types::dto::{CreateCommentRequest, PageQuery};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List the comments of a post, newest first
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments",
    tag = "comments",
    params(
        ("post_id" = u64, Path, description = "Post ID"),
        PageQuery,
    ),
    responses(
        (status = 200, description = "Comments of the post", body = Vec<Comment>),
        (status = 400, description = "Invalid post ID or pagination parameters")
    )
)]
async fn list_comments() {}

/// Add a comment to a post
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments",
    tag = "comments",
    params(
        ("post_id" = u64, Path, description = "Post ID"),
    ),
    request_body = CreateCommentRequest,
    security(("user_id" = [])),
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 400, description = "Invalid post ID or comment body"),
        (status = 401, description = "Missing or invalid X-User-Id header")
    )
)]
async fn create_comment() {}

/// OpenAPI documentation for the Blog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Comment Service API",
        version = "1.0.0",
        description = "Comments on blog posts.\n\n## Authentication\n\nWrite endpoints expect the authenticated user's id in the `X-User-Id` header, set by the upstream gateway.",
        license(name = "MIT"),
    ),
    paths(health, list_comments, create_comment),
    components(schemas(Comment, CommentId, PostId, UserId, CreateCommentRequest)),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "comments", description = "Post comments"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the gateway-provided user header.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "user_id",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-User-Id"))),
            );
        }
    }
}
