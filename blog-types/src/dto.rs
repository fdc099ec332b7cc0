//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;

// ─────────────────────────────────────────────────────────────────────────────
// Comment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to add a comment to a post.
///
/// Unknown fields are ignored, so a client cannot choose the post or author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    /// Comment text
    #[schema(example = "Great post!")]
    pub body: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Pagination
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 100;
pub const MAX_PAGE_OFFSET: u32 = 1_000_000;

/// Raw pagination query parameters, as received over HTTP.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Maximum number of comments to return (1-100, default 10)
    pub limit: Option<String>,
    /// Number of comments to skip (default 0)
    pub offset: Option<String>,
}

/// Validated, bounded pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Parses raw `limit`/`offset` strings into a bounded window.
    ///
    /// Missing or empty values fall back to the defaults.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Result<Self, AppError> {
        let limit = match limit.map(str::trim).filter(|s| !s.is_empty()) {
            None => DEFAULT_PAGE_LIMIT,
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=MAX_PAGE_LIMIT).contains(n))
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "limit must be an integer between 1 and {MAX_PAGE_LIMIT}"
                    ))
                })?,
        };

        let offset = match offset.map(str::trim).filter(|s| !s.is_empty()) {
            None => 0,
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n <= MAX_PAGE_OFFSET)
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "offset must be an integer between 0 and {MAX_PAGE_OFFSET}"
                    ))
                })?,
        };

        Ok(Self { limit, offset })
    }
}

impl TryFrom<&PageQuery> for Pagination {
    type Error = AppError;

    fn try_from(query: &PageQuery) -> Result<Self, Self::Error> {
        Self::parse(query.limit.as_deref(), query.offset.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        assert_eq!(Pagination::parse(None, None).unwrap(), Pagination::default());
        assert_eq!(
            Pagination::parse(Some(""), Some(" ")).unwrap(),
            Pagination::new(DEFAULT_PAGE_LIMIT, 0)
        );
    }

    #[test]
    fn test_parse_valid_window() {
        assert_eq!(
            Pagination::parse(Some("25"), Some("50")).unwrap(),
            Pagination::new(25, 50)
        );
    }

    #[test]
    fn test_limit_out_of_range_fails() {
        assert!(matches!(
            Pagination::parse(Some("0"), None),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            Pagination::parse(Some("101"), None),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_malformed_values_fail() {
        assert!(Pagination::parse(Some("ten"), None).is_err());
        assert!(Pagination::parse(None, Some("-5")).is_err());
        assert!(Pagination::parse(None, Some("1000001")).is_err());
    }

    #[test]
    fn test_request_ignores_identifier_fields() {
        let req: CreateCommentRequest =
            serde_json::from_str(r#"{"body": "hi", "post_id": 99, "user_id": 42}"#).unwrap();
        assert_eq!(req.body, "hi");
    }
}
