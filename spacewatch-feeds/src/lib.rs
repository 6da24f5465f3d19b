//! # spacewatch-feeds
//!
//! Fetching and record extraction for the NOAA Space Weather Prediction
//! Center JSON feeds.
//!
//! ## Pipeline
//!
//! ```text
//! EndpointRegistry ──▶ JsonFetcher ──▶ extract::latest ──▶ Reading
//!   (name → URL)       (GET + JSON)     (last row/record)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spacewatch_feeds::{extract, EndpointRegistry, HttpFetcher, JsonFetcher};
//! use spacewatch_types::Feed;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = EndpointRegistry::default();
//!     let fetcher = HttpFetcher::builder().build()?;
//!
//!     let endpoint = registry.resolve("kp")?;
//!     let payload = fetcher.fetch(&endpoint.url).await?;
//!     let reading = extract::latest(Feed::Kp, payload)?;
//!
//!     println!("Kp now: {}", reading.display(1));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod extract;
pub mod fetch;
pub mod registry;

pub use error::FeedError;
pub use extract::Reading;
pub use fetch::{HttpFetcher, HttpFetcherBuilder, JsonFetcher};
pub use registry::{EndpointRegistry, DEFAULT_BASE_URL};

// Re-export types for convenience
pub use spacewatch_types::{Endpoint, Feed, FeedShape};
