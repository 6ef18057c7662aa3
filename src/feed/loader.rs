//! Feed document loader
//!
//! Fetches the whole feed in one request (no pagination, no auth).
//! A single attempt is made; the caller decides what to show on failure.

use std::sync::Arc;

use crate::config::Config;
use crate::error::FetchError;
use crate::state::data::{Dataset, Entry};

/// HTTP access to the feed and its images
///
/// `reqwest::Client` is reference counted, so clones are cheap and
/// share one connection pool.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        // No timeout: the transport's own failure governs
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            url: config.feed_url.clone(),
        })
    }

    /// The shared HTTP client, used for thumbnail and preview downloads
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download and parse the feed document
    pub async fn fetch(&self) -> Result<Arc<Dataset>, FetchError> {
        tracing::info!("🛰️  Fetching feed from {}", self.url);

        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let dataset = parse_dataset(&body)?;

        tracing::info!("✅ Loaded {} feed entries", dataset.len());
        Ok(Arc::new(dataset))
    }
}

/// Parse the feed document: a JSON array of entries
///
/// The document as a whole must be an array. Individual entries that
/// don't match the model (unknown media type, missing url, ...) are
/// skipped so one bad day doesn't hide the rest of the feed.
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, FetchError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_slice(bytes).map_err(|e| FetchError::Parse(e.to_string()))?;

    let total = values.len();
    let dataset: Dataset = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Entry>(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping feed entry: {e}");
                None
            }
        })
        .collect();

    let skipped = total - dataset.len();
    if skipped > 0 {
        tracing::warn!("⚠️  Skipped {skipped} malformed feed entries");
    }

    Ok(dataset)
}
