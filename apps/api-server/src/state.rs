//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::TimelineStore;
use folio_infra::database::{DatabaseConfig, InMemoryTimelineRepository};

#[cfg(feature = "postgres")]
use folio_infra::database::PostgresTimelineRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub timeline: TimelineStore,
}

impl AppState {
    /// Build the application state with the configured repository.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let timeline = {
            if let Some(config) = db_config {
                match folio_infra::database::connect(config).await {
                    Ok(conn) => {
                        TimelineStore::new(Arc::new(PostgresTimelineRepository::new(conn)))
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        TimelineStore::new(Arc::new(InMemoryTimelineRepository::new()))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                TimelineStore::new(Arc::new(InMemoryTimelineRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let timeline = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            TimelineStore::new(Arc::new(InMemoryTimelineRepository::new()))
        };

        tracing::info!("Application state initialized");

        Self { timeline }
    }

    /// State backed by the in-memory repository. Used by integration tests.
    pub fn in_memory() -> Self {
        Self {
            timeline: TimelineStore::new(Arc::new(InMemoryTimelineRepository::new())),
        }
    }
}
