use async_trait::async_trait;

use crate::domain::{NewTimelinePost, TimelinePost};
use crate::error::RepoError;

/// Persistence port for timeline posts.
///
/// Implementations own id assignment (unique, strictly increasing, never
/// reused) and the atomicity of [`delete_newest`]: two concurrent callers
/// must never both succeed against the same row, and no row other than the
/// current maximum id may ever be deleted.
///
/// [`delete_newest`]: TimelinePostRepository::delete_newest
#[async_trait]
pub trait TimelinePostRepository: Send + Sync {
    /// Persist a validated submission, assigning `id` and `created_at`.
    /// Returns the full stored record.
    async fn insert(&self, post: NewTimelinePost) -> Result<TimelinePost, RepoError>;

    /// All posts, newest first: `created_at` descending, ties broken by
    /// `id` descending.
    async fn list_newest_first(&self) -> Result<Vec<TimelinePost>, RepoError>;

    /// Delete the post with the maximum id and return that id.
    ///
    /// Fails with [`RepoError::Empty`] when no posts exist, and with
    /// [`RepoError::Vanished`] when the targeted row was already removed by
    /// a concurrent caller.
    async fn delete_newest(&self) -> Result<i64, RepoError>;
}
