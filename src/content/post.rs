//! Post models

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::frontmatter::{split_document, FrontMatter};
use crate::config::FrontMatterConfig;

/// An entry of the remote posts directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    /// File name, e.g. `2024-01-01-hello.md`
    pub name: String,

    /// Raw content URL (`None` for directories)
    pub download_url: Option<String>,

    /// Entry kind reported by the listing (`file`, `dir`, `symlink`, ...)
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,

    /// Path inside the repository
    #[serde(default)]
    pub path: String,
}

fn default_kind() -> String {
    "file".to_string()
}

impl PostRef {
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            download_url: Some(download_url.into()),
            kind: default_kind(),
            path: String::new(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }
}

/// A fetched and parsed post
#[derive(Debug, Clone)]
pub struct Post {
    /// Source document name (`a.md`)
    pub name: String,

    /// Title from front-matter, `Untitled` when missing
    pub title: String,

    /// Parsed `date` field
    pub date: Option<DateTime<Local>>,

    /// Markdown body (empty when the document has none)
    pub body: String,

    pub front_matter: FrontMatter,
}

impl Post {
    /// Parse a raw document
    pub fn parse(name: &str, raw: &str, config: &FrontMatterConfig) -> Self {
        let doc = split_document(raw, &config.delimiter, config.split);

        let front_matter = match doc.front_matter {
            Some(block) => FrontMatter::parse(block),
            None => {
                tracing::warn!("{}: no front-matter block found", name);
                FrontMatter::default()
            }
        };

        if doc.body.is_none() {
            tracing::warn!("{}: no body after the front-matter block", name);
        }

        let title = match front_matter.title() {
            Some(title) => title.to_string(),
            None => {
                tracing::warn!("{}: missing title", name);
                "Untitled".to_string()
            }
        };

        let date = front_matter.parse_date();
        if date.is_none() {
            tracing::warn!(
                "{}: missing or unreadable date {:?}",
                name,
                front_matter.date()
            );
        }

        Self {
            name: name.to_string(),
            title,
            date,
            body: doc.body.unwrap_or_default().to_string(),
            front_matter,
        }
    }
}

/// One item of the listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub title: String,
    /// `post.html?post=<name>.html`
    pub href: String,
    /// Formatted date, `None` when the post has no usable date
    pub date: Option<String>,
    pub excerpt: String,
}

/// The detail page of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPage {
    pub title: String,
    pub date: Option<String>,
    /// Full rendered body
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SplitMode;

    #[test]
    fn test_parse_post() {
        let raw = "\n---\ntitle: Hello\ndate: 2024-01-01\n---\nBody text";
        let post = Post::parse("a.md", raw, &FrontMatterConfig::default());
        assert_eq!(post.name, "a.md");
        assert_eq!(post.title, "Hello");
        assert!(post.date.is_some());
        assert_eq!(post.body, "\nBody text");
    }

    #[test]
    fn test_parse_malformed_post() {
        let post = Post::parse("b.md", "just text", &FrontMatterConfig::default());
        assert_eq!(post.title, "Untitled");
        assert!(post.date.is_none());
        assert!(post.front_matter.is_empty());
        assert_eq!(post.body, "");
    }

    #[test]
    fn test_parse_with_custom_delimiter() {
        let config = FrontMatterConfig {
            delimiter: "+++".to_string(),
            split: SplitMode::Legacy,
        };
        let post = Post::parse("c.md", "+++\ntitle: Toml-ish\n+++\nbody\n+++\nmore", &config);
        assert_eq!(post.title, "Toml-ish");
        assert_eq!(post.body, "\nbody\n");
    }

    #[test]
    fn test_post_ref_from_listing_json() {
        let json = r#"[
            {"name": "a.md", "path": "_posts/a.md", "type": "file",
             "download_url": "https://raw.example.com/a.md", "size": 12},
            {"name": "drafts", "path": "_posts/drafts", "type": "dir", "download_url": null}
        ]"#;
        let refs: Vec<PostRef> = serde_json::from_str(json).unwrap();
        assert_eq!(refs.len(), 2);
        assert!(refs[0].is_file());
        assert_eq!(refs[0].download_url.as_deref(), Some("https://raw.example.com/a.md"));
        assert!(!refs[1].is_file());
        assert_eq!(refs[1].download_url, None);
    }
}
