//! Render the detail page of one post

use anyhow::Result;
use std::path::Path;

use crate::Blog;

/// Render the page for `post` (`a.html`); without a name the not-found page is written
pub async fn run(blog: &Blog, post: Option<&str>, output: Option<&Path>) -> Result<()> {
    let generator = blog.generator()?;
    let detail = generator.detail(post).await?;
    if !detail.is_found() {
        tracing::warn!("No post given, rendering the not-found page");
    }

    let html = generator.render_detail(&detail)?;
    super::emit(&html, output)
}
