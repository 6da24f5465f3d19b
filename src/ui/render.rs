//! Text rendering of sections, with optional alert coloring.
//!
//! Rendering is a pure function of its inputs: the same section and
//! renderer always produce the same text.

use chrono::{DateTime, Utc};
use crossterm::style::Stylize;
use spacewatch_types::AlertState;

use super::Theme;
use crate::data::Section;

/// Formats sections as terminal text.
///
/// `theme` is `None` when the output cannot show color; classified values
/// are then printed exactly like unclassified ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    theme: Option<Theme>,
}

impl Renderer {
    /// Renderer without color markers.
    pub fn plain() -> Self {
        Self { theme: None }
    }

    /// Renderer that marks classified values using `theme`.
    pub fn colored(theme: Theme) -> Self {
        Self { theme: Some(theme) }
    }

    pub fn is_colored(&self) -> bool {
        self.theme.is_some()
    }

    /// Render a single `label: value` line.
    pub fn render_line(&self, label: &str, value: &str, alert: Option<AlertState>) -> String {
        let (Some(state), Some(theme)) = (alert, self.theme) else {
            return format!("{}: {}", label, value);
        };

        let styled = value.with(theme.state_color(state));
        if state.is_alert() {
            format!("{}: {}", label, styled.bold())
        } else {
            format!("{}: {}", label, styled)
        }
    }

    pub fn render_header(&self, title: &str) -> String {
        let header = format!("--- {} ---", title);
        match self.theme {
            Some(theme) => header.with(theme.header).bold().to_string(),
            None => header,
        }
    }

    /// Render a section: header, one line per field, then a blank line.
    pub fn render_section(&self, section: &Section) -> String {
        let mut out = self.render_header(section.title());
        out.push('\n');
        for line in &section.lines {
            out.push_str(&self.render_line(line.label, &line.value, line.alert));
            out.push('\n');
        }
        out.push('\n');
        out
    }

    /// Banner printed before each watch-mode cycle.
    pub fn render_banner(&self, now: DateTime<Utc>) -> String {
        let banner = format!("=== Space weather at {} ===", now.format("%Y-%m-%d %H:%M:%S UTC"));
        match self.theme {
            Some(theme) => banner.with(theme.header).to_string(),
            None => banner,
        }
    }
}
