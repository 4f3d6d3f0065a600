//! Front-matter parsing

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;

use crate::config::SplitMode;
use crate::helpers::parse_date;

/// A raw document cut into its front-matter block and body.
///
/// Either part is `None` when the delimiter does not occur often enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    pub front_matter: Option<&'a str>,
    pub body: Option<&'a str>,
}

/// Split `<preamble><delim><front matter><delim><body>`.
///
/// The preamble is dropped. With [`SplitMode::Legacy`] the body stops at the
/// next delimiter; with [`SplitMode::Remainder`] it runs to the end of the text.
pub fn split_document<'a>(raw: &'a str, delimiter: &str, mode: SplitMode) -> Document<'a> {
    if delimiter.is_empty() {
        return Document {
            front_matter: None,
            body: Some(raw),
        };
    }

    let mut segments = raw.splitn(3, delimiter);
    let _preamble = segments.next();
    let front_matter = segments.next();
    let body = segments.next().map(|rest| match mode {
        SplitMode::Remainder => rest,
        SplitMode::Legacy => rest.split(delimiter).next().unwrap_or(rest),
    });

    Document { front_matter, body }
}

/// Front-matter data from a post: an open `key: value` mapping.
///
/// A line without a colon is kept with a `None` value. Repeated keys keep
/// their first position and the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    fields: IndexMap<String, Option<String>>,
}

impl FrontMatter {
    /// Parse a front-matter block. Never fails.
    pub fn parse(block: &str) -> Self {
        let mut fields = IndexMap::new();

        for line in block.trim().split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.split_once(':') {
                Some((key, value)) => {
                    fields.insert(key.trim().to_string(), Some(value.trim().to_string()));
                }
                None => {
                    tracing::trace!("Front-matter line without a colon: {:?}", line);
                    fields.insert(line.to_string(), None);
                }
            }
        }

        Self { fields }
    }

    /// Value of a key; `None` if absent or if the line had no colon
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    /// Parse the `date` field
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date().and_then(parse_date)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
