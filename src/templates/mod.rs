//! Built-in page templates using the Tera template engine
//!
//! The listing and detail page templates are embedded in the binary.

use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{ListEntry, PostPage};
use crate::error::Result;

/// Template renderer with the embedded blog pages
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Titles and excerpts are inserted as-is
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("index.html", include_str!("blog/index.html")),
            ("post.html", include_str!("blog/post.html")),
            (
                "partials/list_item.html",
                include_str!("blog/partials/list_item.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the listing page
    pub fn render_index(&self, site: &SiteData, entries: &[ListEntry]) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("entries", entries);
        self.render("index.html", &context)
    }

    /// Render the detail page; `None` renders the not-found message
    pub fn render_post(&self, site: &SiteData, post: Option<&PostPage>) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("post", &post);
        self.render("post.html", &context)
    }
}

/// Site-wide values available to every template
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub version: String,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
