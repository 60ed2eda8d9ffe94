//! Staleness policy for stored feed documents

use chrono::{DateTime, Duration, Utc};

/// Decides whether a stored record is due for a refresh
///
/// The window is deliberately short; it behaves more like a
/// request-coalescing window than a real cache.
#[derive(Debug, Clone, Copy)]
pub struct StalenessPolicy {
    threshold: Duration,
}

impl StalenessPolicy {
    /// Policy with a threshold in whole seconds
    pub fn from_secs(secs: u64) -> Self {
        Self { threshold: Duration::seconds(secs as i64) }
    }

    /// True iff the record's age strictly exceeds the threshold
    ///
    /// An age of exactly the threshold is fresh, and so is a record
    /// stamped in the future by a skewed clock.
    pub fn is_stale(&self, last_updated: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(last_updated) > self.threshold
    }
}
