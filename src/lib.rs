//! ghblog-rs: a blog front-end for Markdown posts kept in a GitHub repository
//!
//! Posts are fetched when a page is requested. The listing page shows one
//! excerpt per post, the detail page renders a single post in full.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod source;
pub mod templates;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Static assets directory
    pub static_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let mut config = if config_path.exists() {
            tracing::debug!("Loading {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };
        config.apply_env();

        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            static_dir,
        })
    }

    /// Build a generator reading from the configured GitHub repository
    pub fn generator(&self) -> Result<generator::Generator> {
        let source = source::GitHubSource::new(&self.config.github, &self.config.http)?;
        let converter = content::MarkdownRenderer::with_options(&self.config.highlight);

        Ok(generator::Generator::new(
            self.config.clone(),
            Arc::new(source),
            Arc::new(converter),
        )?)
    }
}
