//! Error types for the sync engine

use boxscore_store::StoreError;
use thiserror::Error;

/// Result type alias for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that abort a league's sync attempt
///
/// Callers are expected to catch these and fall back to serving
/// whatever is already stored; nothing here is retried.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Network-level failure talking to the upstream feed
    #[error("Feed fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("Feed returned HTTP {status} for {url}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Feed body was not valid JSON
    #[error("Feed body was not valid JSON for {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Store lookup or write failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SyncError {
    /// True for either flavor of fetch failure, network or status
    pub fn is_fetch(&self) -> bool {
        matches!(self, SyncError::Fetch { .. } | SyncError::FetchStatus { .. })
    }

    /// True when the feed body could not be decoded
    pub fn is_parse(&self) -> bool {
        matches!(self, SyncError::Parse { .. })
    }
}
