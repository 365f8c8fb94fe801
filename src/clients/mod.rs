//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod item_client;

pub use actor_client::*;
pub use item_client::*;
