//! HTTP fetching of JSON feeds.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::FeedError;

/// Trait for retrieving a decoded JSON document from a URL.
///
/// [`HttpFetcher`] is the network implementation; tests substitute canned
/// payloads.
#[async_trait]
pub trait JsonFetcher: Send + Sync + Debug {
    /// GET `url` and decode the body as JSON.
    async fn fetch(&self, url: &str) -> Result<Value, FeedError>;
}

/// Plain GET fetcher: no custom headers, no retry.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new builder for configuring the fetcher.
    pub fn builder() -> HttpFetcherBuilder {
        HttpFetcherBuilder::default()
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FeedError> {
        tracing::debug!(url, "fetching feed");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::transport(url, e))?;

        let status = response.status();
        tracing::debug!(url, status = status.as_u16(), "feed responded");

        if !status.is_success() {
            return Err(FeedError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Read the body first so a dropped connection stays a transport error
        let body = response
            .bytes()
            .await
            .map_err(|e| FeedError::transport(url, e))?;

        serde_json::from_slice(&body).map_err(|e| FeedError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Builder for HttpFetcher.
#[derive(Debug, Default)]
pub struct HttpFetcherBuilder {
    timeout: Option<Duration>,
    no_proxy: bool,
}

impl HttpFetcherBuilder {
    /// Set a whole-request timeout (default: none).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Ignore proxy settings from the environment.
    pub fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Build the fetcher.
    pub fn build(self) -> Result<HttpFetcher, FeedError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|e| FeedError::Transport {
            url: String::new(),
            message: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(HttpFetcher { client })
    }
}
