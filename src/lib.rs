//! # spacewatch
//!
//! A terminal monitor for NOAA Space Weather Prediction Center telemetry.
//!
//! spacewatch fetches the latest solar wind plasma, interplanetary magnetic
//! field, planetary K-index and (optionally) GOES X-ray flux readings, marks
//! values that cross alert thresholds, and prints them as plain text, either
//! once or on a refresh interval.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                           watch::run                             │
//! │  ┌──────────┐    ┌───────────┐    ┌──────────┐    ┌───────────┐  │
//! │  │ registry │───▶│  source   │───▶│   data   │───▶│    ui     │  │
//! │  │ (URLs)   │    │ (fetch)   │    │(classify)│    │ (render)  │  │
//! │  └──────────┘    └───────────┘    └──────────┘    └───────────┘  │
//! │                        App::display_once (one cycle)             │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: [`App`], the display cycle over all feeds
//! - **[`source`]**: Where payloads come from ([`HttpFetcher`], [`StaticFetcher`])
//! - **[`data`]**: Threshold classification and per-feed field layout
//! - **[`ui`]**: Text rendering with optional color and theme detection
//! - **[`watch`]**: Single-shot and periodic runs with interrupt handling
//! - **[`config`]**: Layered settings (defaults, file, environment)
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Latest readings, once
//! spacewatch
//!
//! # Include GOES X-ray flux and refresh every minute
//! spacewatch --all --watch 60
//! ```
//!
//! ### As a library
//!
//! ```
//! use serde_json::json;
//! use spacewatch::{App, Renderer, StaticFetcher};
//! use spacewatch_feeds::{EndpointRegistry, Feed};
//! use spacewatch_types::ThresholdSet;
//!
//! let registry = EndpointRegistry::default();
//! let fetcher = StaticFetcher::new()
//!     .with_feed(&registry, Feed::Plasma, json!([["2024-01-01 00:00", "4.2", "650.1", "90000"]]))
//!     .with_feed(&registry, Feed::Mag, json!([["2024-01-01 00:00", "1.0", "2.0", "-6.5"]]))
//!     .with_feed(&registry, Feed::Kp, json!([["2024-01-01 00:00", "3.00", "15", "8"]]));
//!
//! let app = App::new(registry, fetcher, ThresholdSet::default(), Renderer::plain());
//!
//! # tokio_test::block_on(async {
//! let mut out = Vec::new();
//! app.display_once(&mut out, false).await.unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Speed (km/s): 650.1"));
//! # });
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod source;
pub mod ui;
pub mod watch;

// Re-export main types for convenience
pub use app::App;
pub use config::Settings;
pub use data::{FlareClass, Line, NotNumeric, Section};
pub use source::{HttpFetcher, JsonFetcher, StaticFetcher};
pub use ui::{ColorChoice, Renderer, Theme};
