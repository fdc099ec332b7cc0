//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use blog_types::{AppError, CommentUseCases, CreateCommentRequest, PageQuery, Pagination, PostId};

use super::auth::CurrentUser;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<S: CommentUseCases> {
    pub service: S,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

fn parse_post_id(raw: &str) -> Result<PostId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid post ID".into()))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Serves the OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    use utoipa::OpenApi;
    Json(ApiDoc::openapi())
}

/// List the comments of a post.
#[tracing::instrument(skip(state))]
pub async fn list_comments<S: CommentUseCases>(
    State(state): State<Arc<AppState<S>>>,
    Path(post_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let post_id = parse_post_id(&post_id)?;
    let page = Pagination::try_from(&query)?;

    let comments = state
        .service
        .all(page, post_id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(comments))
}

/// Add a comment to a post as the current user.
#[tracing::instrument(skip(state, req), fields(user_id = %user.0))]
pub async fn create_comment<S: CommentUseCases>(
    State(state): State<Arc<AppState<S>>>,
    Path(post_id): Path<String>,
    user: CurrentUser,
    req: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let post_id = parse_post_id(&post_id)?;
    let Json(req) = req.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let comment = state
        .service
        .insert(req, post_id, user.0)
        .await
        .map_err(AppError::from)?;
    Ok((StatusCode::CREATED, Json(comment)))
}
