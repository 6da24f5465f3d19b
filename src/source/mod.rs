//! Where feed payloads come from.
//!
//! Network access goes through [`HttpFetcher`]; [`StaticFetcher`] serves
//! canned payloads from memory for tests, demos and offline rendering.
//! Both implement [`JsonFetcher`], which [`App`](crate::App) is generic over.

mod fixture;

pub use fixture::StaticFetcher;
pub use spacewatch_feeds::{HttpFetcher, HttpFetcherBuilder, JsonFetcher};
