//! Generator module - turns remote posts into the listing and detail pages

mod detail;
mod listing;

pub use detail::Detail;
pub use listing::Listing;

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::{MarkdownConverter, Post};
use crate::helpers::format_date;
use crate::source::PostSource;
use crate::templates::{SiteData, TemplateRenderer};

/// Renders blog pages from a post source.
///
/// The source and the Markdown converter are injected so that either can be
/// replaced, e.g. by test doubles.
pub struct Generator {
    config: SiteConfig,
    source: Arc<dyn PostSource>,
    converter: Arc<dyn MarkdownConverter>,
    renderer: TemplateRenderer,
    site: SiteData,
}

impl Generator {
    /// Create a new generator
    pub fn new(
        config: SiteConfig,
        source: Arc<dyn PostSource>,
        converter: Arc<dyn MarkdownConverter>,
    ) -> crate::error::Result<Self> {
        let renderer = TemplateRenderer::new()?;
        let site = SiteData::from(&config);

        Ok(Self {
            config,
            source,
            converter,
            renderer,
            site,
        })
    }

    /// Display form of a post's date
    fn display_date(&self, post: &Post) -> Option<String> {
        post.date
            .as_ref()
            .map(|date| format_date(date, &self.config.date_format))
    }
}
