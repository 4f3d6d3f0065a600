//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::helpers::encode_path_segment;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // Where the posts live
    #[serde(default)]
    pub github: GitHubConfig,

    // Outbound requests
    #[serde(default)]
    pub http: HttpConfig,

    // Writing
    #[serde(default)]
    pub front_matter: FrontMatterConfig,
    pub excerpt_length: usize,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Date format (Moment.js style tokens)
    pub date_format: String,

    // Directory with css/images served next to the pages
    pub static_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            author: String::new(),
            language: "en".to_string(),

            github: GitHubConfig::default(),
            http: HttpConfig::default(),

            front_matter: FrontMatterConfig::default(),
            excerpt_length: 150,
            highlight: HighlightConfig::default(),

            date_format: "M/D/YYYY".to_string(),

            static_dir: "static".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Fill the GitHub token from the environment when the file leaves it unset
    pub fn apply_env(&mut self) {
        if self.github.token.is_none() {
            if let Ok(token) = std::env::var("GITHUB_TOKEN") {
                if !token.trim().is_empty() {
                    tracing::debug!("Using GitHub token from GITHUB_TOKEN");
                    self.github.token = Some(token.trim().to_string());
                }
            }
        }
    }
}

/// Repository that holds the Markdown posts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub posts_dir: String,
    pub api_url: String,
    pub raw_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: "alemanoelsilva".to_string(),
            repo: "alemanoelsilva.github.io".to_string(),
            branch: "master".to_string(),
            posts_dir: "_posts".to_string(),
            api_url: "https://api.github.com".to_string(),
            raw_url: "https://raw.githubusercontent.com".to_string(),
            token: None,
        }
    }
}

impl GitHubConfig {
    /// Contents API endpoint listing the posts directory
    pub fn listing_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.posts_dir.trim_matches('/')
        )
    }

    /// Raw content URL of a post document, `name` including its `.md` suffix.
    ///
    /// The name is escaped as a single path segment.
    pub fn raw_post_url(&self, name: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}",
            self.raw_url.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.branch,
            self.posts_dir.trim_matches('/'),
            encode_path_segment(name.trim_start_matches('/'))
        )
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Posts fetched at once while building the listing (1 = one after another)
    pub concurrency: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("ghblog-rs/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            concurrency: 1,
        }
    }
}

/// How a document body is cut out of the raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Body is everything after the closing delimiter
    #[default]
    Remainder,
    /// Body is only the text up to the next delimiter
    Legacy,
}

/// Front-matter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatterConfig {
    pub delimiter: String,
    pub split: SplitMode,
}

impl Default for FrontMatterConfig {
    fn default() -> Self {
        Self {
            delimiter: "---".to_string(),
            split: SplitMode::Remainder,
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
