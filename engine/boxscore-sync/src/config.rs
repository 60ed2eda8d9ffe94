//! Sync service configuration

use boxscore_store::{League, StoreConfig};
use serde::{Deserialize, Serialize};

/// Configuration for the feed sync service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Upstream feed endpoints
    pub feeds: FeedConfig,

    /// Staleness window in seconds; a stored record older than this is
    /// refreshed on the next sync
    pub staleness_secs: u64,

    /// Database configuration
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// NBA feed document
    pub nba_url: String,

    /// MLB feed document
    pub mlb_url: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            feeds: FeedConfig {
                nba_url: "https://chumley.barstoolsports.com/dev/data/games/6c974274-4bfc-4af8-a9c4-8b926637ba74.json".to_string(),
                mlb_url: "https://chumley.barstoolsports.com/dev/data/games/eed38457-db28-4658-ae4f-4d4d38e9e212.json".to_string(),
            },
            staleness_secs: 15,
            store: StoreConfig::default(),
        }
    }
}

impl SyncConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("BOXSCORE_NBA_FEED_URL") {
            config.feeds.nba_url = url;
        }

        if let Ok(url) = std::env::var("BOXSCORE_MLB_FEED_URL") {
            config.feeds.mlb_url = url;
        }

        if let Ok(secs) = std::env::var("BOXSCORE_STALENESS_SECS") {
            config.staleness_secs = secs.parse().unwrap_or(config.staleness_secs);
        }

        config.store = StoreConfig::from_env();

        config
    }

    /// Feed endpoint for a league
    pub fn feed_url(&self, league: League) -> &str {
        match league {
            League::Nba => &self.feeds.nba_url,
            League::Mlb => &self.feeds.mlb_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_staleness_window_is_fifteen_seconds() {
        assert_eq!(SyncConfig::default().staleness_secs, 15);
    }

    #[test]
    fn test_feed_url_maps_league_to_its_document() {
        let config = SyncConfig::default();

        assert!(config.feed_url(League::Nba).contains("6c974274"));
        assert!(config.feed_url(League::Mlb).contains("eed38457"));
    }
}
