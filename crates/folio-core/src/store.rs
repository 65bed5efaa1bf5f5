//! The timeline store - validation plus persistence behind one interface.

use std::sync::Arc;

use crate::domain::TimelinePost;
use crate::error::TimelineError;
use crate::ports::TimelinePostRepository;
use crate::validation;

/// Owns the repository handle and enforces validation before persistence.
///
/// The repository is passed in at construction; there is no process-wide
/// singleton. Cloning is cheap and all clones share the same repository.
#[derive(Clone)]
pub struct TimelineStore {
    repo: Arc<dyn TimelinePostRepository>,
}

impl TimelineStore {
    pub fn new(repo: Arc<dyn TimelinePostRepository>) -> Self {
        Self { repo }
    }

    /// Validate and persist a new post, returning the stored record with its
    /// assigned id and timestamp. Invalid input never reaches storage.
    pub async fn create(
        &self,
        name: Option<String>,
        email: Option<String>,
        content: Option<String>,
    ) -> Result<TimelinePost, TimelineError> {
        let draft = validation::validate(name, email, content)?;
        Ok(self.repo.insert(draft).await?)
    }

    /// All posts, newest first. An empty timeline is an empty vec, not an
    /// error.
    pub async fn list(&self) -> Result<Vec<TimelinePost>, TimelineError> {
        Ok(self.repo.list_newest_first().await?)
    }

    /// Delete the most recent post and return its id.
    pub async fn delete_newest(&self) -> Result<i64, TimelineError> {
        Ok(self.repo.delete_newest().await?)
    }
}
