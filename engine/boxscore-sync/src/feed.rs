//! Upstream feed client

use crate::error::{Result, SyncError};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

/// Where sync attempts get their JSON documents from
///
/// Seam between the orchestrator and the network; tests script feed
/// responses through it instead of reaching upstream.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch one feed document
    async fn fetch(&self, url: &str) -> Result<Value>;
}

/// HTTP feed client
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Create a client with the standard request timeout
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SyncError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl FeedSource for FeedClient {
    async fn fetch(&self, url: &str) -> Result<Value> {
        info!("Fetching feed document from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SyncError::Fetch { url: url.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::FetchStatus { url: url.to_string(), status });
        }

        // Decode in two steps so a malformed body classifies as a parse
        // failure rather than a transport one
        let body = response
            .text()
            .await
            .map_err(|source| SyncError::Fetch { url: url.to_string(), source })?;

        let document: Value = serde_json::from_str(&body)
            .map_err(|source| SyncError::Parse { url: url.to_string(), source })?;

        info!("Fetched feed document from: {}", url);

        Ok(document)
    }
}
