use boxscore_store::{GameStore, PgGameStore};
use boxscore_sync::{FeedClient, SyncConfig, SyncOrchestrator};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting boxscore feed sync");

    // Load configuration
    let config = SyncConfig::from_env();
    info!("Loaded configuration");

    // Connect the store and build the orchestrator
    let store = PgGameStore::connect(&config.store).await?;
    let feed = FeedClient::new()?;
    let orchestrator = SyncOrchestrator::new(config, feed, store);

    // One pass over every league
    for (league, result) in orchestrator.sync_all().await {
        match result {
            Ok(outcome) => info!("{}: {:?}", league, outcome),
            Err(e) => error!("{} sync failed: {}", league, e),
        }
    }

    // Read back what is stored
    for record in orchestrator.store().list_all().await? {
        info!(
            "Stored {} record {} (last updated {})",
            record.league, record.id, record.last_updated
        );
    }

    Ok(())
}
