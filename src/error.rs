//! Error types for fetching and rendering posts

use thiserror::Error;

/// Errors raised by the post source, the renderers and the configuration loader
#[derive(Debug, Error)]
pub enum BlogError {
    /// Transport-level failure (DNS, connection, timeout, body read)
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The directory listing was not the expected JSON array
    #[error("failed to decode post listing from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A listed file came without a download URL
    #[error("post {name} has no download URL")]
    MissingDownloadUrl { name: String },

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = BlogError> = std::result::Result<T, E>;
