//! Folio API server building blocks, exposed as a library so the binary and
//! the integration tests share the same app wiring.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
