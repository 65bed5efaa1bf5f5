//! In-memory repository - used for tests and database-less development.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use folio_core::domain::{NewTimelinePost, TimelinePost};
use folio_core::error::RepoError;
use folio_core::ports::TimelinePostRepository;

struct MemoryState {
    next_id: i64,
    posts: Vec<TimelinePost>,
}

/// Mutex-guarded vec standing in for the relational table.
///
/// The single lock gives the same guarantees the database does: atomic id
/// assignment and an atomic select-max-then-delete. Data is lost on process
/// restart.
pub struct InMemoryTimelineRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryTimelineRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: 1,
                posts: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryTimelineRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimelinePostRepository for InMemoryTimelineRepository {
    async fn insert(&self, post: NewTimelinePost) -> Result<TimelinePost, RepoError> {
        let mut state = self.state.lock().await;

        let stored = TimelinePost {
            id: state.next_id,
            name: post.name,
            email: post.email,
            content: post.content,
            created_at: Utc::now(),
        };
        state.next_id += 1;
        state.posts.push(stored.clone());

        Ok(stored)
    }

    async fn list_newest_first(&self) -> Result<Vec<TimelinePost>, RepoError> {
        let state = self.state.lock().await;

        let mut posts = state.posts.clone();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(posts)
    }

    async fn delete_newest(&self) -> Result<i64, RepoError> {
        let mut state = self.state.lock().await;

        let max_id = state
            .posts
            .iter()
            .map(|p| p.id)
            .max()
            .ok_or(RepoError::Empty)?;
        state.posts.retain(|p| p.id != max_id);

        Ok(max_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, content: &str) -> NewTimelinePost {
        NewTimelinePost {
            name: name.to_string(),
            email: email.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn ids_increase_and_are_never_reused() {
        let repo = InMemoryTimelineRepository::new();

        let first = repo
            .insert(draft("John Doe", "johndoe@gmail.com", "Hello world"))
            .await
            .unwrap();
        let second = repo
            .insert(draft("Jane Doe", "janedoe@gmail.com", "Hi"))
            .await
            .unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        // Deleting the newest must not free its id for reuse.
        assert_eq!(repo.delete_newest().await.unwrap(), 2);
        let third = repo
            .insert(draft("Jane Doe", "janedoe@gmail.com", "Hi again"))
            .await
            .unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn lists_newest_first_with_id_tiebreak() {
        let repo = InMemoryTimelineRepository::new();

        // Inserted back-to-back, so created_at values may collide; the id
        // tiebreak keeps the order deterministic.
        repo.insert(draft("John Doe", "johndoe@gmail.com", "first"))
            .await
            .unwrap();
        repo.insert(draft("Jane Doe", "janedoe@gmail.com", "second"))
            .await
            .unwrap();
        repo.insert(draft("Joe Doe", "joedoe@gmail.com", "third"))
            .await
            .unwrap();

        let posts = repo.list_newest_first().await.unwrap();
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing_and_refuses_delete() {
        let repo = InMemoryTimelineRepository::new();

        assert!(repo.list_newest_first().await.unwrap().is_empty());
        assert!(matches!(
            repo.delete_newest().await.unwrap_err(),
            RepoError::Empty
        ));
    }

    #[tokio::test]
    async fn identical_submissions_are_not_deduplicated() {
        let repo = InMemoryTimelineRepository::new();

        let a = repo
            .insert(draft("John Doe", "johndoe@gmail.com", "Hello world"))
            .await
            .unwrap();
        let b = repo
            .insert(draft("John Doe", "johndoe@gmail.com", "Hello world"))
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(repo.list_newest_first().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_always_targets_the_maximum_id() {
        let repo = InMemoryTimelineRepository::new();

        repo.insert(draft("John Doe", "johndoe@gmail.com", "Hello"))
            .await
            .unwrap();
        repo.insert(draft("Jane Doe", "janedoe@gmail.com", "Hi"))
            .await
            .unwrap();

        assert_eq!(repo.delete_newest().await.unwrap(), 2);
        assert_eq!(repo.delete_newest().await.unwrap(), 1);
        assert!(matches!(
            repo.delete_newest().await.unwrap_err(),
            RepoError::Empty
        ));
    }
}
