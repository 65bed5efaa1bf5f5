//! Error types for the timeline core.

use thiserror::Error;

/// Rejection reasons from the validation layer.
///
/// The `Display` strings are the exact reasons clients see on a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid name")]
    Name,

    #[error("Invalid content")]
    Content,

    #[error("Invalid email")]
    Email,
}

/// Timeline store errors - what callers of [`crate::store::TimelineStore`]
/// match on.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// Caller-supplied data violates a field rule. Recoverable by fixing the
    /// input and resubmitting.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The requested deletion target does not exist. The message is the
    /// client-facing description.
    #[error("{0}")]
    NotFound(String),

    /// Underlying persistence failure unrelated to input validity. The
    /// detail is logged server-side and never returned to clients.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Repository-level errors, produced by
/// [`crate::ports::TimelinePostRepository`] implementations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),

    /// The table holds no posts at all.
    #[error("no posts found")]
    Empty,

    /// The targeted row was removed between select and delete.
    #[error("post {0} vanished before deletion")]
    Vanished(i64),
}

impl From<RepoError> for TimelineError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Empty => TimelineError::NotFound("No posts found to delete.".to_string()),
            RepoError::Vanished(id) => {
                TimelineError::NotFound(format!("Post with ID {id} not found."))
            }
            RepoError::Connection(msg) | RepoError::Query(msg) => TimelineError::Storage(msg),
        }
    }
}
