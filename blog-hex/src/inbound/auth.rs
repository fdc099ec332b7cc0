//! Caller identity for write endpoints.
//!
//! Authentication happens upstream (the API gateway validates the session
//! token); it forwards the authenticated user's id in the `X-User-Id` header.

use axum::{extract::FromRequestParts, http::request::Parts};

use blog_types::{AppError, UserId};

use super::handlers::ApiError;

/// Header carrying the authenticated user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Parses the user id from the raw header value.
fn parse_user_id(header: Option<&str>) -> Option<UserId> {
    let raw = header?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

/// The authenticated user making the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok());

        match parse_user_id(header) {
            Some(user_id) => Ok(CurrentUser(user_id)),
            None => {
                tracing::debug!("rejecting request without a valid user id");
                Err(AppError::Unauthorized("Missing or invalid X-User-Id header".into()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id(Some("9")), Some(UserId::new(9)));
        assert_eq!(parse_user_id(Some(" 12 ")), Some(UserId::new(12)));
    }

    #[test]
    fn test_parse_user_id_invalid() {
        assert_eq!(parse_user_id(Some("")), None);
        assert_eq!(parse_user_id(Some("alice")), None);
        assert_eq!(parse_user_id(Some("-3")), None);
    }

    #[test]
    fn test_parse_user_id_none() {
        assert_eq!(parse_user_id(None), None);
    }
}
