use boxscore_store::League;
use boxscore_sync::{FeedClient, FeedSource, SyncConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Probing boxscore feeds");

    let config = SyncConfig::from_env();
    let feed = FeedClient::new()?;

    for league in League::ALL {
        let url = config.feed_url(league);
        info!("Probing {} feed at {}", league, url);

        match feed.fetch(url).await {
            Ok(document) => {
                if let Some(object) = document.as_object() {
                    info!("{}: document with {} top-level fields", league, object.len());

                    for key in object.keys().take(8) {
                        info!("  {}", key);
                    }
                } else {
                    info!("{}: non-object document", league);
                }
            }
            Err(e) => error!("{} probe failed: {}", league, e),
        }
    }

    info!("Probe completed");

    Ok(())
}
