//! Generic actor framework for resource storage.
//!
//! This module provides the building blocks for a type-safe, single-owner
//! in-memory store that serves CRUD requests over a channel.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be stored by an actor
//! - [`ResourceActor`] - Generic actor that owns the entities
//! - [`ResourceClient`] - Typed handle for sending requests to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
