use item_catalog::config::CatalogConfig;
use item_catalog::lifecycle::{setup_tracing, CatalogSystem};
use item_catalog::model::{ItemCreate, ItemUpdate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = CatalogConfig::from_env()?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!(?config, "Starting item catalog");
    let system = CatalogSystem::new(&config);

    let span = tracing::info_span!("item_creation");
    let watch = async {
        info!("Creating watch");
        system
            .items
            .create(ItemCreate {
                name: "Watch".to_string(),
                category: "時計".to_string(),
                brand: "ROLEX".to_string(),
                purchase_price: 1_500_000,
                purchase_date: "2023-01-15".to_string(),
            })
            .await
    }
    .instrument(span)
    .await?;

    info!(id = %watch.id, "Item created successfully");

    let span = tracing::info_span!("item_update");
    let renamed = async {
        info!("Renaming watch");
        system
            .items
            .update(
                watch.id.get(),
                ItemUpdate {
                    name: Some("更新後の名前".to_string()),
                    ..Default::default()
                },
            )
            .await
    }
    .instrument(span)
    .await?;

    info!(id = %renamed.id, name = %renamed.name, "Item updated successfully");

    // Rejected update: nothing reaches the store
    let negative_price = ItemUpdate {
        purchase_price: Some(-1),
        ..Default::default()
    };
    match system.items.update(watch.id.get(), negative_price).await {
        Ok(item) => error!(id = %item.id, "Negative price should be rejected"),
        Err(e) => info!(error = %e, "Negative price rejected as expected"),
    }

    let summary = system.items.category_summary().await?;
    for (category, count) in &summary.categories {
        info!(%category, count, "Category count");
    }
    info!(total = summary.total, "Summary complete");

    match system.items.delete(999).await {
        Ok(()) => error!("Deleting a missing item should fail"),
        Err(e) => info!(error = %e, "Missing item reported"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
