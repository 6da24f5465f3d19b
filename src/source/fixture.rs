//! In-memory fetcher.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;
use spacewatch_feeds::{EndpointRegistry, FeedError, JsonFetcher};
use spacewatch_types::Feed;

/// A fetcher that answers from a fixed URL → payload table.
///
/// Unknown URLs answer like a missing resource (HTTP 404). Every request
/// is recorded so callers can check what was fetched and in which order.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use spacewatch::source::StaticFetcher;
/// use spacewatch_feeds::{EndpointRegistry, Feed, JsonFetcher};
///
/// let registry = EndpointRegistry::default();
/// let fetcher = StaticFetcher::new()
///     .with_feed(&registry, Feed::Kp, json!([["2024-01-01 00:00:00", "2.33", "7", "8"]]));
///
/// # tokio_test::block_on(async {
/// let payload = fetcher.fetch(&registry.endpoint(Feed::Kp).url).await.unwrap();
/// assert_eq!(payload[0][1], "2.33");
/// # });
/// ```
#[derive(Debug, Default)]
pub struct StaticFetcher {
    payloads: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` for `url`.
    pub fn with(mut self, url: impl Into<String>, payload: Value) -> Self {
        self.payloads.insert(url.into(), payload);
        self
    }

    /// Serve `payload` at the URL `registry` assigns to `feed`.
    pub fn with_feed(self, registry: &EndpointRegistry, feed: Feed, payload: Value) -> Self {
        let url = registry.endpoint(feed).url.clone();
        self.with(url, payload)
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl JsonFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FeedError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        self.payloads
            .get(url)
            .cloned()
            .ok_or_else(|| FeedError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}
