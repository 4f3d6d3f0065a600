//! Post name and link helpers

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a query-string value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'%');

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Page name for a source document: `a.md` -> `a.html`
pub fn html_name(source_name: &str) -> String {
    match source_name.strip_suffix(".md") {
        Some(stem) => format!("{}.html", stem),
        None => source_name.to_string(),
    }
}

/// Source document for a page name: `a.html` -> `a.md`
pub fn source_name(html_name: &str) -> String {
    match html_name.strip_suffix(".html") {
        Some(stem) => format!("{}.md", stem),
        None => html_name.to_string(),
    }
}

/// Link from the listing to the detail page of a post
///
/// # Examples
/// ```ignore
/// post_href("a.html") // -> "post.html?post=a.html"
/// ```
pub fn post_href(html_name: &str) -> String {
    format!(
        "post.html?post={}",
        utf8_percent_encode(html_name, QUERY_VALUE)
    )
}

/// Escape a file name for use as one path segment of a URL
pub fn encode_path_segment(name: &str) -> String {
    utf8_percent_encode(name, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_name() {
        assert_eq!(html_name("a.md"), "a.html");
        assert_eq!(html_name("2024-01-01-hello.md"), "2024-01-01-hello.html");
        assert_eq!(html_name("notes.md.bak"), "notes.md.bak");
    }

    #[test]
    fn test_source_name() {
        assert_eq!(source_name("a.html"), "a.md");
        assert_eq!(source_name("a"), "a");
    }

    #[test]
    fn test_post_href() {
        assert_eq!(post_href("a.html"), "post.html?post=a.html");
        assert_eq!(post_href("my post&x.html"), "post.html?post=my%20post%26x.html");
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("a.md"), "a.md");
        assert_eq!(encode_path_segment("c#sharp.md"), "c%23sharp.md");
        assert_eq!(encode_path_segment("why? 100%.md"), "why%3F%20100%25.md");
        assert_eq!(encode_path_segment("olá.md"), "ol%C3%A1.md");
    }
}
