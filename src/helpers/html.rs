//! HTML text helpers

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any `<...>` span, tag or not
    static ref ANGLE_SPAN: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Strip every angle-bracket span from a string.
///
/// This is not an HTML parser: text such as `a <b c` is kept, while
/// `1 < 2 > 0` loses `< 2 >`.
pub fn strip_html(s: &str) -> String {
    ANGLE_SPAN.replace_all(s, "").into_owned()
}

/// Cut a string to `length` characters and append `omission` when it is longer
pub fn truncate_chars(s: &str, length: usize, omission: &str) -> String {
    match s.char_indices().nth(length) {
        Some((cut, _)) => format!("{}{}", &s[..cut], omission),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
        assert_eq!(strip_html("<p>Body text</p>\n"), "Body text\n");
    }

    #[test]
    fn test_strip_html_unclosed() {
        assert_eq!(strip_html("a <b c"), "a <b c");
        assert_eq!(strip_html("1 < 2 > 0"), "1  0");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("Hello World", 5, "..."), "Hello...");
        assert_eq!(truncate_chars("Hi", 10, "..."), "Hi");
        assert_eq!(truncate_chars("Hello", 5, "..."), "Hello");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("héllo wörld", 7, "..."), "héllo w...");
    }
}
