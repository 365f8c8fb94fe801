use thiserror::Error;
use tracing::{error, info};

use crate::clients::ItemClient;
use crate::config::CatalogConfig;
use crate::service::ItemService;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("store task failed: {0}")]
    StoreTask(#[from] tokio::task::JoinError),
}

/// Runtime wiring for the catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the item store actor
/// - **Dependency Wiring**: Building the [`ItemService`] on top of the store client
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&CatalogConfig::default());
///
/// let item = system.items.create(input).await?;
/// let summary = system.items.category_summary().await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Item operations backed by the running store actor
    pub items: ItemService<ItemClient>,

    /// Task handle for the store actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the item store actor and wires the service to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &CatalogConfig) -> Self {
        let (item_actor, item_client) = crate::item_actor::new(config.store_buffer);
        let handle = tokio::spawn(item_actor.run());

        Self {
            items: ItemService::new(item_client),
            handle,
        }
    }

    /// Gracefully shuts down the catalog.
    ///
    /// Dropping the service closes the store's channel; the actor drains what
    /// is already queued and exits.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down catalog...");
        drop(self.items);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Store task failed");
            return Err(e.into());
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
