//! Domain entities - the core business objects.

mod timeline_post;

pub use timeline_post::{NewTimelinePost, TimelinePost};
