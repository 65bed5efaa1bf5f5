//! # Folio Core
//!
//! The domain layer of the Folio timeline service.
//! This crate contains pure business logic with zero infrastructure
//! dependencies: the [`TimelinePost`] model, submission validation, and the
//! [`TimelineStore`] operations (create / list / delete-newest).

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;
pub mod validation;

pub use domain::{NewTimelinePost, TimelinePost};
pub use error::{RepoError, TimelineError, ValidationError};
pub use store::TimelineStore;
