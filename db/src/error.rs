use sea_orm::DbErr;
use thiserror::Error;

/// Business-rule failures raised by entity helpers. Handlers map these to
/// HTTP statuses; only `Db` is unexpected.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("end date must be after start date")]
    InvalidDateRange,

    #[error("database error: {0}")]
    Db(#[from] DbErr),
}
