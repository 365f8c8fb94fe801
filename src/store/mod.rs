//! The storage boundary the item service depends on.
//!
//! [`ItemStore`] is the only way the service reaches persisted state. The
//! in-memory implementation is [`ItemClient`](crate::clients::ItemClient);
//! any other backend only has to implement this trait.

pub mod error;

pub use error::*;

use async_trait::async_trait;
use std::collections::HashMap;

use crate::model::{Item, ItemId, NewItem};

/// Persistence operations for items.
///
/// Every method may fail with [`StoreError::NotFound`] where an id is
/// involved, or with any other [`StoreError`] for backend trouble. Retries,
/// timeouts and locking are the implementation's business.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All stored items, in the backend's natural order.
    async fn find_all(&self) -> Result<Vec<Item>, StoreError>;

    async fn find_by_id(&self, id: ItemId) -> Result<Item, StoreError>;

    /// Stores a validated item and returns it with its assigned id.
    async fn create(&self, item: NewItem) -> Result<Item, StoreError>;

    /// Overwrites the stored copy of `item`.
    async fn update(&self, item: &Item) -> Result<(), StoreError>;

    async fn delete(&self, id: ItemId) -> Result<(), StoreError>;

    /// Item count per category label. Categories without items may be omitted.
    async fn count_by_category(&self) -> Result<HashMap<String, u64>, StoreError>;
}
