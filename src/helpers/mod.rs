//! Helper functions shared by the renderers
//!
//! Date parsing/formatting, HTML text helpers and the post name
//! conventions used to link the listing and detail pages.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
