//! Feed identities and their static properties.

use core::fmt;
use core::str::FromStr;

/// Layout of a decoded feed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedShape {
    /// An array of positional rows; the first row is a column header.
    Rows,
    /// A keyed object, or an array of keyed objects.
    Records,
}

/// One of the SWPC data feeds polled by spacewatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Feed {
    /// Real-time solar wind plasma (density, speed, temperature).
    Plasma,
    /// Real-time interplanetary magnetic field.
    Mag,
    /// Planetary K-index.
    Kp,
    /// GOES primary X-ray flux.
    Xray,
}

impl Feed {
    /// Every feed, in display order.
    pub const ALL: [Feed; 4] = [Feed::Plasma, Feed::Mag, Feed::Kp, Feed::Xray];

    /// Short symbolic name used for lookups and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Feed::Plasma => "plasma",
            Feed::Mag => "mag",
            Feed::Kp => "kp",
            Feed::Xray => "xray",
        }
    }

    /// Human-readable section title.
    pub fn title(&self) -> &'static str {
        match self {
            Feed::Plasma => "Solar Wind (Plasma)",
            Feed::Mag => "Interplanetary Magnetic Field",
            Feed::Kp => "Geomagnetic Indices (Kp)",
            Feed::Xray => "GOES X-ray Flux",
        }
    }

    /// Path of the feed relative to the service base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Feed::Plasma => "/products/solar-wind/plasma-5-minute.json",
            Feed::Mag => "/products/solar-wind/mag-5-minute.json",
            Feed::Kp => "/products/noaa-planetary-k-index.json",
            Feed::Xray => "/json/goes/primary/xrays-7-day.json",
        }
    }

    pub fn shape(&self) -> FeedShape {
        match self {
            Feed::Xray => FeedShape::Records,
            _ => FeedShape::Rows,
        }
    }

    /// Minimum number of columns a row must carry. Zero for record feeds.
    pub fn min_fields(&self) -> usize {
        match self.shape() {
            FeedShape::Rows => 4,
            FeedShape::Records => 0,
        }
    }

    /// Whether the feed is only shown when extended output is requested.
    pub fn is_extended(&self) -> bool {
        matches!(self, Feed::Xray)
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown feed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFeed(pub String);

impl fmt::Display for UnknownFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown feed: {}", self.0)
    }
}

impl std::error::Error for UnknownFeed {}

impl FromStr for Feed {
    type Err = UnknownFeed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feed::ALL
            .into_iter()
            .find(|feed| feed.name() == s)
            .ok_or_else(|| UnknownFeed(s.to_string()))
    }
}

/// A feed paired with the absolute URL it is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub feed: Feed,
    pub url: String,
}

impl Endpoint {
    /// Build the endpoint for `feed` under `base_url`.
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn new(feed: Feed, base_url: &str) -> Self {
        Self {
            feed,
            url: format!("{}{}", base_url.trim_end_matches('/'), feed.path()),
        }
    }
}
