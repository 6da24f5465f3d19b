//! Classification and shaping of feed readings.
//!
//! This module turns an extracted [`Reading`](spacewatch_feeds::Reading) into
//! display-ready lines with alert states computed from [`ThresholdSet`].
//!
//! ## Submodules
//!
//! - [`mod@classify`]: Parsing feed values and comparing them with thresholds
//! - [`flare`]: GOES flare class (A/B/C/M/X) from X-ray flux
//! - [`section`]: Per-feed field layout ([`Section`], [`Line`])
//!
//! ## Data Flow
//!
//! ```text
//! Reading (last row / record)
//!        │
//!        ▼
//! Section::from_reading()
//!        │
//!        └──▶ Line (label, raw value, Option<AlertState>)
//! ```
//!
//! [`ThresholdSet`]: spacewatch_types::ThresholdSet

pub mod classify;
pub mod flare;
pub mod section;

pub use classify::{classify, classify_or_skip, numeric, NotNumeric};
pub use flare::FlareClass;
pub use section::{Line, Section};
