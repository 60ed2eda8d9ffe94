//! Sync orchestrator
//!
//! Per league: look up the stored record, fetch the feed if the record
//! is missing or stale, and route to insert, in-place update, or no-op.

use crate::config::SyncConfig;
use crate::error::Result;
use crate::feed::FeedSource;
use crate::staleness::StalenessPolicy;
use boxscore_store::{GameRecord, GameStore, League};
use chrono::Utc;
use tracing::{info, warn};

/// What a sync attempt did for a league
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No record existed; one was inserted
    Created,

    /// Record existed and was stale; payload overwritten in place
    Updated,

    /// Record existed and was still fresh; nothing written
    Unchanged,
}

/// Drives upstream updates into the game store
pub struct SyncOrchestrator<F, S> {
    config: SyncConfig,
    policy: StalenessPolicy,
    feed: F,
    store: S,
}

impl<F: FeedSource, S: GameStore> SyncOrchestrator<F, S> {
    /// Create an orchestrator over a feed source and a store
    pub fn new(config: SyncConfig, feed: F, store: S) -> Self {
        let policy = StalenessPolicy::from_secs(config.staleness_secs);

        Self { config, policy, feed, store }
    }

    /// Sync one league
    ///
    /// Any fetch or store failure aborts this league's attempt; the
    /// caller serves whatever is already stored.
    pub async fn sync(&self, league: League) -> Result<SyncOutcome> {
        let now = Utc::now();

        match self.store.find_by_league(league).await? {
            None => {
                let payload = self.feed.fetch(self.config.feed_url(league)).await?;
                let record = GameRecord::new(league, payload, now);
                self.store.insert(&record).await?;

                info!("Created {} record {}", league, record.id);
                Ok(SyncOutcome::Created)
            }
            Some(existing) if self.policy.is_stale(existing.last_updated, now) => {
                let payload = self.feed.fetch(self.config.feed_url(league)).await?;
                self.store.update_payload(existing.id, &payload, now).await?;

                info!("Refreshed {} record {}", league, existing.id);
                Ok(SyncOutcome::Updated)
            }
            Some(_) => Ok(SyncOutcome::Unchanged),
        }
    }

    /// Sync every league; one league's failure does not abort the others
    pub async fn sync_all(&self) -> Vec<(League, Result<SyncOutcome>)> {
        let mut results = Vec::with_capacity(League::ALL.len());

        for league in League::ALL {
            let result = self.sync(league).await;

            if let Err(e) = &result {
                warn!("Sync failed for {}: {}", league, e);
            }

            results.push((league, result));
        }

        results
    }

    /// Store access for callers that serve reads after syncing
    pub fn store(&self) -> &S {
        &self.store
    }
}
