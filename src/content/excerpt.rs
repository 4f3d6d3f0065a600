//! Plain-text excerpts for the listing page

use super::MarkdownConverter;
use crate::error::Result;
use crate::helpers::{strip_html, truncate_chars};

pub const DEFAULT_EXCERPT_LENGTH: usize = 150;

const OMISSION: &str = "...";

/// Render `body`, strip the markup and cut it to `max_length` characters.
///
/// A cut excerpt is exactly `max_length + 3` characters long and ends in `...`.
pub fn render_excerpt(
    converter: &dyn MarkdownConverter,
    body: &str,
    max_length: usize,
) -> Result<String> {
    let rendered = converter.render(body)?;
    let stripped = strip_html(&rendered);
    Ok(truncate_chars(&stripped, max_length, OMISSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MarkdownRenderer;

    /// Passes text through untouched
    struct Verbatim;

    impl MarkdownConverter for Verbatim {
        fn render(&self, markdown: &str) -> Result<String> {
            Ok(markdown.to_string())
        }
    }

    #[test]
    fn test_short_text_unchanged() {
        let text = "a".repeat(DEFAULT_EXCERPT_LENGTH);
        assert_eq!(render_excerpt(&Verbatim, &text, DEFAULT_EXCERPT_LENGTH).unwrap(), text);
        assert_eq!(render_excerpt(&Verbatim, "", DEFAULT_EXCERPT_LENGTH).unwrap(), "");
    }

    #[test]
    fn test_long_text_truncated() {
        for len in [151, 200, 1000] {
            let text = "b".repeat(len);
            let out = render_excerpt(&Verbatim, &text, DEFAULT_EXCERPT_LENGTH).unwrap();
            assert_eq!(out.chars().count(), DEFAULT_EXCERPT_LENGTH + 3);
            assert!(out.ends_with("..."));
        }
    }

    #[test]
    fn test_custom_length() {
        let out = render_excerpt(&Verbatim, "Hello World", 5).unwrap();
        assert_eq!(out, "Hello...");
    }

    #[test]
    fn test_tags_stripped_before_measuring() {
        let html = format!("<p>{}</p>", "c".repeat(10));
        assert_eq!(render_excerpt(&Verbatim, &html, 10).unwrap(), "c".repeat(10));
    }

    #[test]
    fn test_rendered_markdown() {
        let renderer = MarkdownRenderer::new();
        let out = render_excerpt(&renderer, "Body *text*", DEFAULT_EXCERPT_LENGTH).unwrap();
        assert_eq!(out, "Body text\n");
    }

    #[test]
    fn test_multibyte_boundary() {
        let text = "é".repeat(20);
        let out = render_excerpt(&Verbatim, &text, 10).unwrap();
        assert_eq!(out, format!("{}...", "é".repeat(10)));
    }
}
