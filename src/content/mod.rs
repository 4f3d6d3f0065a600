//! Content module - handles posts, front-matter and markdown processing

mod excerpt;
mod frontmatter;
mod markdown;
mod post;

pub use excerpt::{render_excerpt, DEFAULT_EXCERPT_LENGTH};
pub use frontmatter::{split_document, Document, FrontMatter};
pub use markdown::{MarkdownConverter, MarkdownRenderer};
pub use post::{ListEntry, Post, PostPage, PostRef};
