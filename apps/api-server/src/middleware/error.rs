//! Mapping of application failures onto RFC 7807 responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use lokal_core::error::{DomainError, RepoError};
use lokal_shared::ErrorResponse;

/// Handler-level error, rendered as an RFC 7807 body.
///
/// This is the only place failures get logged; the core returns them
/// silently and the presentation layer decides what is worth recording.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                ErrorResponse::internal_error()
            }
            AppError::Unavailable(detail) => {
                tracing::error!(%detail, "storage unavailable");
                ErrorResponse::service_unavailable()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => AppError::NotFound("post not found".to_owned()),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Unauthenticated => AppError::Unauthorized,
            DomainError::StorageUnavailable(msg) => AppError::Unavailable(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) | RepoError::Query(msg) => AppError::Unavailable(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
