//! Render the listing page

use anyhow::Result;
use std::path::Path;

use crate::content::ListEntry;
use crate::generator::Generator;
use crate::Blog;

/// Render the listing as a page, or as one plain line per post
pub async fn run(blog: &Blog, plain: bool, output: Option<&Path>) -> Result<()> {
    let generator = blog.generator()?;
    let content = render(&generator, plain).await?;
    super::emit(&content, output)
}

pub async fn render(generator: &Generator, plain: bool) -> Result<String> {
    if plain {
        let listing = generator.listing().await?;
        if let Some(err) = &listing.failure {
            tracing::error!(
                "Listing stopped after {} posts: {}",
                listing.entries.len(),
                err
            );
        }
        Ok(plain_listing(&listing.entries))
    } else {
        Ok(generator.render_listing_page().await?)
    }
}

fn plain_listing(entries: &[ListEntry]) -> String {
    let mut lines = vec![format!("Posts ({}):", entries.len())];
    for entry in entries {
        lines.push(format!(
            "  {} - {} [{}]",
            entry.date.as_deref().unwrap_or("----------"),
            entry.title,
            entry.href
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::testing::{config, generator, StubSource};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_render_plain() {
        let source = Arc::new(
            StubSource::default()
                .with_post("a.md", "U1", "---\ntitle: A\ndate: 2024-01-01\n---\na")
                .with_post("b.md", "U2", "---\ntitle: B\n---\nb"),
        );
        let gen = generator(source, config());

        let text = render(&gen, true).await.unwrap();
        assert_eq!(
            text,
            "Posts (2):\n  2024-01-01 - A [post.html?post=a.html]\n  ---------- - B [post.html?post=b.html]"
        );
    }

    #[tokio::test]
    async fn test_render_plain_stops_at_failure() {
        let mut source = StubSource::default().with_post("a.md", "U1", "---\ntitle: A\n---\na");
        source
            .listing
            .push(crate::content::PostRef::new("b.md", "MISSING"));
        let gen = generator(Arc::new(source), config());

        let text = render(&gen, true).await.unwrap();
        assert_eq!(text, "Posts (1):\n  ---------- - A [post.html?post=a.html]");
    }

    #[tokio::test]
    async fn test_render_page() {
        let source = Arc::new(StubSource::default().with_post("a.md", "U1", "---\ntitle: A\n---\na"));
        let gen = generator(source, config());

        let html = render(&gen, false).await.unwrap();
        assert!(html.contains(r#"<ul class="post-list">"#));
    }
}
