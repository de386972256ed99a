//! Error handling - every failure becomes a `{"error": "..."}` JSON body.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use blog_core::{RepoError, ValidationError};
use blog_shared::ErrorResponse;
use std::fmt;

use crate::observability::RequestId;

/// Message returned when an update or delete targets a missing post.
pub const POST_NOT_FOUND: &str = "Post not found";

/// Application-level error type that converts to JSON error responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    MethodNotAllowed,
    PayloadTooLarge(usize),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::Internal(msg) => {
                f.write_str(msg)
            }
            AppError::MethodNotAllowed => f.write_str("Method not allowed"),
            AppError::PayloadTooLarge(limit) => {
                write!(f, "Request body exceeds the {} byte limit", limit)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            tracing::error!("Internal error: {}", detail);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound(POST_NOT_FOUND.to_string()),
            RepoError::Connection(_) | RepoError::Query(_) | RepoError::Constraint(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

/// Malformed, missing or mistyped JSON bodies all read as "no data"; only an
/// oversized body gets its own status.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(
        request_id = %RequestId::of(req),
        path = %req.path(),
        error = %err,
        "Rejected request body"
    );

    match err {
        JsonPayloadError::Overflow { limit }
        | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            AppError::PayloadTooLarge(limit).into()
        }
        _ => AppError::from(ValidationError::NoData).into(),
    }
}

/// A non-integer id can never name a post.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(
        request_id = %RequestId::of(req),
        path = %req.path(),
        error = %err,
        "Rejected path parameter"
    );
    AppError::NotFound("Not found".to_string()).into()
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Not found".to_string()))
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
