//! Post sources - where the raw Markdown documents come from

mod github;

pub use github::GitHubSource;

use async_trait::async_trait;

use crate::content::PostRef;
use crate::error::Result;

/// Remote store of post documents
#[async_trait]
pub trait PostSource: Send + Sync {
    /// List the posts directory, in the order the store returns it
    async fn list_posts(&self) -> Result<Vec<PostRef>>;

    /// Fetch raw document text from a listing's download URL
    async fn fetch_raw(&self, url: &str) -> Result<String>;

    /// Fetch a post document by name (`a.md`)
    async fn fetch_post(&self, name: &str) -> Result<String>;
}
