//! # Item Service
//!
//! The single entry point for item operations. It validates requests, merges
//! partial updates into stored state and translates storage failures, but
//! holds no state of its own: every call runs start to finish against the
//! [`ItemStore`] it was built with.
//!
//! Dropping a returned future cancels the operation at its next storage call;
//! there are no retries, timeouts or locks here.

use chrono::Utc;
use tracing::{debug, error, info, instrument, warn};

use crate::model::validation::{validate_brand, validate_name, validate_price};
use crate::model::{CategorySummary, Item, ItemCreate, ItemId, ItemUpdate, NewItem, ValidationError};
use crate::service::ItemError;
use crate::store::{ItemStore, StoreError};

/// Item operations over any [`ItemStore`].
pub struct ItemService<S> {
    store: S,
}

impl<S: ItemStore> ItemService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns every item exactly as storage lists them.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Item>, ItemError> {
        let items = self
            .store
            .find_all()
            .await
            .map_err(log_internal("failed to retrieve items"))?;
        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Item, ItemError> {
        let id = parse_id(id)?;
        self.find_existing(id, "failed to retrieve item").await
    }

    /// Validates `input` and stores it as a new item.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: ItemCreate) -> Result<Item, ItemError> {
        debug!(?input, "create called");
        let item = NewItem::try_from(input).map_err(|e| {
            warn!(error = %e, "Rejected item");
            ItemError::from(e)
        })?;

        let created = self
            .store
            .create(item)
            .await
            .map_err(log_internal("failed to create item"))?;
        info!(id = %created.id, category = %created.category, "Item created");
        Ok(created)
    }

    /// Deletes an item.
    ///
    /// Existence is checked first, so deleting a missing id reports
    /// [`ItemError::ItemNotFound`] instead of silently succeeding.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ItemError> {
        let id = parse_id(id)?;
        self.find_existing(id, "failed to check item existence").await?;

        self.store
            .delete(id)
            .await
            .map_err(log_internal("failed to delete item"))?;
        info!(%id, "Item deleted");
        Ok(())
    }

    /// Counts items per category, listing every valid category even when it
    /// has no items.
    #[instrument(skip(self))]
    pub async fn category_summary(&self) -> Result<CategorySummary, ItemError> {
        let counts = self
            .store
            .count_by_category()
            .await
            .map_err(log_internal("failed to get category summary"))?;

        let summary = CategorySummary::from_counts(&counts);
        debug!(total = summary.total, "Summarized categories");
        Ok(summary)
    }

    /// Applies a partial update to `name`, `brand` and/or `purchase_price`.
    ///
    /// Only the fields present in `input` are validated and changed; the
    /// rest of the stored item is already valid and is not re-checked.
    /// `id`, `category`, `purchase_date` and `created_at` are never
    /// touched. Nothing is persisted unless every present field passes.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: ItemUpdate) -> Result<Item, ItemError> {
        debug!(?input, "update called");
        let id = parse_id(id)?;
        if input.is_empty() {
            warn!(%id, "Rejected empty update");
            return Err(ValidationError::EmptyUpdate.into());
        }

        let mut item = self.find_existing(id, "failed to retrieve item").await?;

        if let Some(name) = input.name.as_deref() {
            item.name = validate_name(name)?;
        }
        if let Some(brand) = input.brand.as_deref() {
            item.brand = validate_brand(brand)?;
        }
        if let Some(price) = input.purchase_price {
            item.purchase_price = validate_price(price)?;
        }
        item.touch(Utc::now());

        self.store
            .update(&item)
            .await
            .map_err(log_internal("failed to update item"))?;
        info!(%id, "Item updated");
        Ok(item)
    }

    async fn find_existing(&self, id: ItemId, context: &'static str) -> Result<Item, ItemError> {
        match self.store.find_by_id(id).await {
            Ok(item) => Ok(item),
            Err(e) if e.is_not_found() => {
                warn!(%id, "Item not found");
                Err(ItemError::ItemNotFound)
            }
            Err(e) => Err(log_internal(context)(e)),
        }
    }
}

fn parse_id(raw: i64) -> Result<ItemId, ItemError> {
    ItemId::try_from(raw).map_err(|e| {
        warn!(id = raw, "Rejected id");
        ItemError::from(e)
    })
}

fn log_internal(context: &'static str) -> impl FnOnce(StoreError) -> ItemError {
    move |source| {
        error!(error = %source, "{context}");
        ItemError::internal(context)(source)
    }
}
