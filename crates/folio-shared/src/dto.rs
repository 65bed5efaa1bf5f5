//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Form-encoded body of `POST /api/timeline_post`.
///
/// Every field is optional at the wire level; the validation layer treats a
/// missing field as empty instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePostForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
}
