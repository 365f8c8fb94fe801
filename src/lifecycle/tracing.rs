//! # Observability & Tracing
//!
//! [`setup_tracing`] installs structured logging for the whole catalog.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: Actor startup, shutdown, and final size
//! - **Store Requests**: List, Get, Create, Replace, Delete with item ids
//! - **Service Calls**: One span per operation, with the rejected field or
//!   failing storage operation on error
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the service layer
//! RUST_LOG=item_catalog::service=debug cargo run
//! ```
//!
//! When `RUST_LOG` is unset the filter from
//! [`CatalogConfig::log_filter`](crate::config::CatalogConfig::log_filter) applies.
//!
//! With `RUST_LOG=info` a create-then-update run reads:
//!
//! ```text
//! INFO Actor started entity_type="Item"
//! INFO create: Created entity_type="Item" id=1 size=1
//! INFO create: Item created id=1 category=時計
//! INFO update{id=1}: Replaced entity_type="Item" id=1
//! INFO update{id=1}: Item updated id=1
//! ```
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "update{id=1}")
        .try_init();
}
