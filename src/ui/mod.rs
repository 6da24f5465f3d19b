//! Terminal text output.
//!
//! - [`render`]: Section, line and banner formatting ([`Renderer`])
//! - [`theme`]: Alert/normal/header colors with light/dark detection
//!
//! Color capability is decided once, at startup, by [`ColorChoice::renderer`]
//! and carried in the [`Renderer`] from then on.

pub mod render;
pub mod theme;

pub use render::Renderer;
pub use theme::Theme;

use std::io::IsTerminal;

/// When to emit colored output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is not set.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide whether color is available given the environment.
    pub fn resolve(self, is_terminal: bool, no_color: bool, term: Option<&str>) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal && !no_color && term != Some("dumb"),
        }
    }

    /// Resolve against the current process and build the matching renderer.
    pub fn renderer(self) -> Renderer {
        let term = std::env::var("TERM").ok();
        let enabled = self.resolve(
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
            term.as_deref(),
        );

        if !enabled {
            return Renderer::plain();
        }

        // Background detection queries the terminal, so only do it on a tty
        if std::io::stdout().is_terminal() {
            Renderer::colored(Theme::auto_detect())
        } else {
            Renderer::colored(Theme::dark())
        }
    }
}
