//! # spacewatch-types
//!
//! Core types for space-weather telemetry. This crate defines the feeds that
//! spacewatch polls, the thresholds readings are compared against, and the
//! alert states that come out of that comparison.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable the `serde` feature to load thresholds from config
//! - **Closed feed set**: The four SWPC feeds are an enum, not free-form strings
//!
//! ## Example
//!
//! ```rust
//! use spacewatch_types::{AlertState, Metric, ThresholdSet};
//!
//! let thresholds = ThresholdSet::default();
//!
//! assert_eq!(thresholds.get(Metric::Speed).classify(700.0), AlertState::Alert);
//! assert_eq!(thresholds.get(Metric::Bz).classify(-3.0), AlertState::Normal);
//! ```

mod feed;
mod threshold;

pub use feed::*;
pub use threshold::*;

/// Placeholder shown for a value a feed did not provide.
pub const NOT_AVAILABLE: &str = "N/A";
