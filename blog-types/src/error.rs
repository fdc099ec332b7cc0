//! Error types for the comment service.

/// Errors raised while converting a submitted comment into its stored shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("Field `{0}` cannot be empty")]
    EmptyField(&'static str),

    #[error("Field `{field}` is too long: {actual} characters, at most {max} allowed")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid row: {0}")]
    InvalidRow(String),
}

/// Errors returned by the comment service.
///
/// Repository errors are carried through untouched.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".into()),
            RepoError::Conflict(e) => AppError::BadRequest(e),
            RepoError::Database(e) => AppError::Internal(e),
            RepoError::InvalidRow(e) => AppError::Internal(e),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Mapping(e) => AppError::BadRequest(e.to_string()),
            ServiceError::Repo(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_error_is_bad_request() {
        let err: AppError = ServiceError::from(MappingError::EmptyField("body")).into();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("body")));
    }

    #[test]
    fn test_database_error_is_internal() {
        let err: AppError = ServiceError::from(RepoError::Database("down".into())).into();
        assert!(matches!(err, AppError::Internal(msg) if msg == "down"));
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err: AppError = ServiceError::from(RepoError::NotFound).into();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
