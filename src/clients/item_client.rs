//! # Item Client
//!
//! Wraps a `ResourceClient<Item>` and exposes it as an [`ItemStore`].
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Item, ItemId, NewItem};
use crate::store::{ItemStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Client for interacting with the Item actor.
#[derive(Clone)]
pub struct ItemClient {
    inner: ResourceClient<Item>,
}

impl ItemClient {
    pub fn new(inner: ResourceClient<Item>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Item> for ItemClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Item> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(_) => StoreError::NotFound,
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                StoreError::Unavailable(e.to_string())
            }
            FrameworkError::Custom(msg) => StoreError::Backend(msg),
        }
    }
}

#[async_trait]
impl ItemStore for ItemClient {
    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        self.fetch_all().await
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Item, StoreError> {
        self.fetch(id).await
    }

    #[instrument(skip(self, item), fields(name = %item.name))]
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        debug!("Sending request");
        self.inner.create(item).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, item), fields(id = %item.id))]
    async fn update(&self, item: &Item) -> Result<(), StoreError> {
        debug!("Sending request");
        self.inner.replace(item.clone()).await.map_err(Self::map_error)
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        self.remove(id).await
    }

    #[instrument(skip(self))]
    async fn count_by_category(&self) -> Result<HashMap<String, u64>, StoreError> {
        let items = self.fetch_all().await?;
        let mut counts: HashMap<String, u64> = HashMap::new();
        for item in &items {
            *counts.entry(item.category.as_str().to_string()).or_default() += 1;
        }
        debug!(categories = counts.len(), "Counted items by category");
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_get, expect_list, expect_replace};

    fn item(id: i64, category: &str) -> Item {
        let new = NewItem::new("Thing", category, "Brand", 100, "2023-03-03").unwrap();
        Item::from_new(ItemId::try_from(id).unwrap(), new)
    }

    #[tokio::test]
    async fn test_missing_item_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Item>(10);
        let item_client = ItemClient::new(client);

        let task = tokio::spawn(async move {
            item_client.find_by_id(ItemId::try_from(7).unwrap()).await
        });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id.get(), 7);
        responder.send(Err(FrameworkError::NotFound("7".into()))).unwrap();

        let result = task.await.unwrap();
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_count_by_category_omits_empty_categories() {
        let (client, mut receiver) = create_mock_client::<Item>(10);
        let item_client = ItemClient::new(client);

        let task = tokio::spawn(async move { item_client.count_by_category().await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder
            .send(Ok(vec![item(1, "時計"), item(2, "靴"), item(3, "時計")]))
            .unwrap();

        let counts = task.await.unwrap().unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["時計"], 2);
        assert_eq!(counts["靴"], 1);
        assert!(!counts.contains_key("バッグ"));
    }

    #[tokio::test]
    async fn test_update_sends_full_replacement() {
        let (client, mut receiver) = create_mock_client::<Item>(10);
        let item_client = ItemClient::new(client);
        let mut edited = item(4, "バッグ");
        edited.purchase_price = 42;
        let sent = edited.clone();

        let task = tokio::spawn(async move { item_client.update(&sent).await });

        let (entity, responder) = expect_replace(&mut receiver).await.expect("Expected Replace request");
        assert_eq!(entity, edited);
        responder.send(Ok(())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn test_dropped_actor_maps_to_unavailable() {
        let (client, receiver) = create_mock_client::<Item>(10);
        drop(receiver);
        let item_client = ItemClient::new(client);

        let result = item_client.find_all().await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
