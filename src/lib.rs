//! # Item Catalog
//!
//! > **A catalog of owned items with validated CRUD and a per-category summary.**
//!
//! Each item records a name, a category from a fixed set, a brand, a purchase
//! price and a purchase date. The crate holds the rules that decide what is
//! valid, what may change after creation, and how a partial update merges
//! with stored state. Transport (HTTP, CLI) is left to the caller.
//!
//! ## 🏗️ Design
//!
//! ### Validated construction
//! Raw input ([`ItemCreate`](model::ItemCreate)) only becomes a
//! [`NewItem`](model::NewItem) after every field passes validation, and only
//! a store can turn that into an [`Item`](model::Item) by assigning an id.
//!
//! ### Storage behind a trait
//! The service talks to storage through [`ItemStore`](store::ItemStore). Storage
//! failures are a small closed set ([`StoreError`](store::StoreError)); the
//! service branches on the variant, never on message text.
//!
//! ### Single-owner store
//! The bundled backend is a generic [`ResourceActor`](framework::ResourceActor)
//! running in its own Tokio task. It processes requests one at a time, so it
//! needs no locks. Concurrent updates to one item are applied in arrival
//! order: last write wins.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Domain ([`model`])
//! - **Role**: Entity, input shapes, the [`Category`](model::Category) set, field validation.
//!
//! ### 2. The Rules ([`service`])
//! - **Role**: [`ItemService`](service::ItemService) runs get/create/update/delete/summary
//!   and maps failures onto [`ItemError`](service::ItemError).
//!
//! ### 3. The Boundary ([`store`])
//! - **Role**: The [`ItemStore`](store::ItemStore) trait the service depends on.
//!
//! ### 4. The Engine ([`framework`], [`item_actor`], [`clients`])
//! - **Role**: In-memory storage: a generic actor, the `Item` wiring, and
//!   [`ItemClient`](clients::ItemClient), which implements `ItemStore`.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: [`CatalogSystem`](lifecycle::CatalogSystem) starts and stops
//!   everything; [`CatalogConfig`](config::CatalogConfig) reads the environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod item_actor;
pub mod lifecycle;
pub mod model;
pub mod service;
pub mod store;
