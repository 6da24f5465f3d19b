//! The display cycle: fetch, extract, classify and render each feed.

use std::io::Write;

use anyhow::{Context, Result};
use spacewatch_feeds::{extract, EndpointRegistry, FeedError, JsonFetcher};
use spacewatch_types::{Feed, ThresholdSet};

use crate::data::Section;
use crate::ui::Renderer;

/// Everything one display cycle needs.
///
/// `App` holds no readings: each [`App::display_once`] call fetches fresh
/// data and drops it once the sections are written.
#[derive(Debug)]
pub struct App<F> {
    registry: EndpointRegistry,
    fetcher: F,
    thresholds: ThresholdSet,
    renderer: Renderer,
}

impl<F: JsonFetcher> App<F> {
    pub fn new(
        registry: EndpointRegistry,
        fetcher: F,
        thresholds: ThresholdSet,
        renderer: Renderer,
    ) -> Self {
        Self {
            registry,
            fetcher,
            thresholds,
            renderer,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Feeds shown in one cycle, in display order.
    pub fn feeds(include_extended: bool) -> impl Iterator<Item = Feed> {
        Feed::ALL
            .into_iter()
            .filter(move |feed| include_extended || !feed.is_extended())
    }

    /// Fetch the latest reading of `feed` and lay it out as a section.
    pub async fn section(&self, feed: Feed) -> Result<Section, FeedError> {
        let endpoint = self.registry.resolve(feed.name())?;
        let payload = self.fetcher.fetch(&endpoint.url).await?;
        let reading = extract::latest(feed, payload)?;
        Ok(Section::from_reading(feed, &reading, &self.thresholds))
    }

    /// Write plasma, magnetic field and K-index sections, then X-ray if
    /// `include_extended` is set.
    ///
    /// Sections are fetched one after another. The first failure stops the
    /// cycle; sections already written stay written, and the failing section
    /// is never partially printed.
    pub async fn display_once<W: Write>(&self, out: &mut W, include_extended: bool) -> Result<()> {
        for feed in Self::feeds(include_extended) {
            let section = self.section(feed).await.with_context(|| {
                format!(
                    "{} section incomplete ({})",
                    feed.title(),
                    self.registry.endpoint(feed).url
                )
            })?;

            if section.has_alert() {
                tracing::info!(feed = feed.name(), "reading past alert threshold");
            }

            out.write_all(self.renderer.render_section(&section).as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }
}
