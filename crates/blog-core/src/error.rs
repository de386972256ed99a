//! Domain-level error types.

use thiserror::Error;

use crate::domain::TITLE_MAX_CHARS;

/// Validation errors - input rejected before it reaches storage.
///
/// The `Display` text is the message returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No data provided")]
    NoData,

    #[error("Title and content are required")]
    MissingFields,

    #[error("Title must be <= {} characters", TITLE_MAX_CHARS)]
    TitleTooLong,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
