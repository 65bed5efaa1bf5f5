use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// TimelinePost entity - a single guestbook entry on the public timeline.
///
/// `id` is a store-assigned surrogate key forming a strictly increasing
/// sequence in creation order; it is never reused and never client-supplied.
/// The post with the maximum `id` is always the most recently created post
/// still present. `created_at` is set once at creation and is the descending
/// sort key for listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePost {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A submission that passed validation but has not been persisted yet.
///
/// Produced by [`crate::validation::validate`]; the store assigns `id` and
/// `created_at` on insert. Fields carry the submitted values unchanged - no
/// trimming, normalization, or case-folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimelinePost {
    pub name: String,
    pub email: String,
    pub content: String,
}
