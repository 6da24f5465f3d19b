//! Fixed mapping from feed names to their URLs.

use spacewatch_types::{Endpoint, Feed, UnknownFeed};

use crate::FeedError;

/// Public SWPC service root.
pub const DEFAULT_BASE_URL: &str = "https://services.swpc.noaa.gov";

/// The four feed endpoints, resolved against one base URL.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    endpoints: [Endpoint; 4],
}

impl EndpointRegistry {
    /// Build the registry under `base_url` (e.g. a mirror or a test server).
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoints: Feed::ALL.map(|feed| Endpoint::new(feed, base_url)),
        }
    }

    /// Look up an endpoint by its symbolic name.
    pub fn resolve(&self, name: &str) -> Result<&Endpoint, FeedError> {
        let feed: Feed = name
            .parse()
            .map_err(|UnknownFeed(name)| FeedError::UnknownEndpoint(name))?;
        Ok(self.endpoint(feed))
    }

    pub fn endpoint(&self, feed: Feed) -> &Endpoint {
        // `Feed::ALL` is in declaration order, so the discriminant is the index
        &self.endpoints[feed as usize]
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
