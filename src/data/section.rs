//! Turning a reading into labeled, classified display lines.

use serde_json::Value;
use spacewatch_feeds::extract::display_value;
use spacewatch_feeds::Reading;
use spacewatch_types::{AlertState, Feed, Threshold, ThresholdSet, NOT_AVAILABLE};

use super::classify::{classify_or_skip, numeric};
use super::flare::FlareClass;

/// GOES energy band that flare classes are measured in.
const FLARE_BAND: &str = "0.1-0.8nm";

/// One labeled value. `alert` is `None` for fields without a threshold and
/// for values that could not be classified.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub label: &'static str,
    pub value: String,
    pub alert: Option<AlertState>,
}

impl Line {
    fn plain(label: &'static str, value: &Value) -> Self {
        Self {
            label,
            value: display_value(value),
            alert: None,
        }
    }

    fn classified(label: &'static str, value: &Value, threshold: &Threshold) -> Self {
        Self {
            label,
            value: display_value(value),
            alert: classify_or_skip(value, threshold),
        }
    }
}

/// A titled block of lines for one feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub feed: Feed,
    pub lines: Vec<Line>,
}

impl Section {
    pub fn title(&self) -> &'static str {
        self.feed.title()
    }

    /// Whether any classified line is in alert.
    pub fn has_alert(&self) -> bool {
        self.lines
            .iter()
            .any(|l| l.alert.is_some_and(|a| a.is_alert()))
    }

    /// Build the section for `feed` from its latest reading.
    pub fn from_reading(feed: Feed, reading: &Reading, thresholds: &ThresholdSet) -> Self {
        let na = Value::String(NOT_AVAILABLE.to_string());
        let at = |i: usize| reading.get(i).unwrap_or(&na);

        let lines = match feed {
            Feed::Plasma => vec![
                Line::plain("Time (UTC)", at(0)),
                Line::plain("Density (p/cm³)", at(1)),
                Line::classified("Speed (km/s)", at(2), &thresholds.speed),
                Line::plain("Temperature (K)", at(3)),
            ],
            Feed::Mag => {
                let mut lines = vec![
                    Line::plain("Time (UTC)", at(0)),
                    Line::classified("Bz (GSM, nT)", at(3), &thresholds.bz),
                ];
                if let Some(bt) = reading.get(6) {
                    lines.push(Line::plain("Bt (nT)", bt));
                }
                lines
            }
            Feed::Kp => vec![
                Line::plain("Time (UTC)", at(0)),
                Line::classified("Kp Index", at(1), &thresholds.kp),
                Line::plain("A Index (3-hr avg)", at(3)),
            ],
            Feed::Xray => {
                let flux = reading.field("flux");
                let energy = reading.field("energy");

                let mut lines = vec![
                    Line::plain("Time (UTC)", &reading.field("time_tag")),
                    Line::classified("Flux (W/m²)", &flux, &thresholds.xray),
                ];
                // Flare classes are defined on the long-wavelength channel only
                if energy == FLARE_BAND {
                    let class = numeric(&flux)
                        .ok()
                        .and_then(FlareClass::from_flux)
                        .map_or_else(|| NOT_AVAILABLE.to_string(), |c| c.to_string());
                    lines.push(Line {
                        label: "Flare class",
                        value: class,
                        alert: None,
                    });
                }
                if energy != na {
                    lines.push(Line::plain("Energy band", &energy));
                }
                lines
            }
        };

        Self { feed, lines }
    }
}
