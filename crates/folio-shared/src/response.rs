//! API response envelopes.

use serde::{Deserialize, Serialize};

/// Success envelope for operations that report a human-readable outcome,
/// e.g. `{"message": "Post 2 deleted successfully."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error envelope for JSON error responses, e.g. `{"error": "No posts found
/// to delete."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
