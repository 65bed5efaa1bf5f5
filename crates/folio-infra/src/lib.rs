//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM
//!
//! The in-memory repository is always available; it backs tests and
//! database-less development mode.

pub mod database;

pub use database::InMemoryTimelineRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresTimelineRepository;
