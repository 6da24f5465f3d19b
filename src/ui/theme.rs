//! Color theme for terminal output.
//!
//! Supports light and dark themes with automatic terminal detection.

use crossterm::style::Color;
use spacewatch_types::AlertState;

/// Colors used to mark classified values and section headers.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Color for values past their threshold.
    pub alert: Color,
    /// Color for values within their threshold.
    pub normal: Color,
    /// Color for section headers.
    pub header: Color,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            alert: Color::Red,
            normal: Color::Green,
            header: Color::Cyan,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            alert: Color::DarkRed,
            normal: Color::DarkGreen,
            header: Color::Blue,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get color for an alert state
    pub fn state_color(&self, state: AlertState) -> Color {
        match state {
            AlertState::Normal => self.normal,
            AlertState::Alert => self.alert,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
