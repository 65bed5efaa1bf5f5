//! Error handling - maps timeline errors onto the HTTP contract.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use folio_core::error::TimelineError;
use folio_shared::ErrorResponse;

/// Application-level error type that converts into HTTP responses.
///
/// Validation failures become plain-text 400s carrying the exact reason,
/// missing deletion targets become JSON 404s, and storage failures become
/// generic 500s with the detail logged server-side only.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(reason) => HttpResponse::BadRequest().body(reason.clone()),
            AppError::NotFound(msg) => {
                HttpResponse::NotFound().json(ErrorResponse::new(msg.clone()))
            }
            AppError::Internal(detail) => {
                // The cause is logged here and never sent to the client.
                tracing::error!("Internal error: {}", detail);
                HttpResponse::InternalServerError()
                    .body("An unexpected error occurred internally.")
            }
        }
    }
}

// Conversion from timeline store errors
impl From<TimelineError> for AppError {
    fn from(err: TimelineError) -> Self {
        match err {
            TimelineError::Validation(reason) => AppError::BadRequest(reason.to_string()),
            TimelineError::NotFound(msg) => AppError::NotFound(msg),
            TimelineError::Storage(detail) => AppError::Internal(detail),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
