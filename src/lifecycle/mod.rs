//! Runtime orchestration and lifecycle management.
//!
//! - [`CatalogSystem`] - Starts the item store, builds the service, shuts both down
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::*;
pub use self::tracing::setup_tracing;
