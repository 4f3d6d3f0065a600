//! Detail page: one fully rendered post

use super::Generator;
use crate::content::{Post, PostPage};
use crate::error::Result;
use crate::helpers::source_name;

/// Outcome of looking up a single post
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// No usable post name was given; nothing was fetched
    NotFound,
    Found(PostPage),
}

impl Detail {
    pub fn is_found(&self) -> bool {
        matches!(self, Detail::Found(_))
    }
}

impl Generator {
    /// Fetch and render the post named by the `post` query value (`a.html`)
    pub async fn detail(&self, post: Option<&str>) -> Result<Detail> {
        let html_name = match post {
            Some(name) if !name.is_empty() => name,
            _ => {
                tracing::debug!("No post requested");
                return Ok(Detail::NotFound);
            }
        };

        if html_name.contains('/') || html_name.contains('\\') {
            tracing::warn!("Rejecting post name with a path separator: {:?}", html_name);
            return Ok(Detail::NotFound);
        }

        let name = source_name(html_name);
        let raw = self.source.fetch_post(&name).await?;
        let post = Post::parse(&name, &raw, &self.config.front_matter);
        let content = self.converter.render(&post.body)?;

        Ok(Detail::Found(PostPage {
            date: self.display_date(&post),
            title: post.title,
            content,
        }))
    }

    /// Render the detail page for a lookup result
    pub fn render_detail(&self, detail: &Detail) -> Result<String> {
        let page = match detail {
            Detail::Found(page) => Some(page),
            Detail::NotFound => None,
        };
        self.renderer.render_post(&self.site, page)
    }

    /// Fetch a post and render its page
    pub async fn render_detail_page(&self, post: Option<&str>) -> Result<String> {
        let detail = self.detail(post).await?;
        self.render_detail(&detail)
    }
}
