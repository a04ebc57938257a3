//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures returned by the service layer.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The write was rejected before reaching storage; the message is safe
    /// to surface to the caller.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The post does not exist, or exists but is owned by someone else.
    /// The two causes are deliberately indistinguishable.
    #[error("not found")]
    NotFound,

    /// A dashboard operation was attempted without a resolved identity.
    #[error("authentication required")]
    Unauthenticated,

    /// The storage backend failed; the operation may be retried by the caller.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// Repository-level errors raised by storage adapters.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),

    #[error("constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::StorageUnavailable(err.to_string())
    }
}
