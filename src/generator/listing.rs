//! Listing page: one excerpt entry per remote post

use futures::{stream, StreamExt};
use std::pin::pin;

use super::Generator;
use crate::content::{render_excerpt, ListEntry, Post, PostRef};
use crate::error::{BlogError, Result};
use crate::helpers::{html_name, post_href};

/// Entries gathered for the listing page
#[derive(Debug, Default)]
pub struct Listing {
    /// Entries in source order, up to the first failing post
    pub entries: Vec<ListEntry>,
    /// Error of the post that stopped the listing, if any
    pub failure: Option<BlogError>,
}

impl Listing {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

impl Generator {
    /// Build the listing entries in the order the source lists the posts.
    ///
    /// Up to `http.concurrency` documents are fetched at once; results are
    /// still gathered by position. The first failing post stops the listing,
    /// and the entries gathered before it are kept.
    pub async fn listing(&self) -> Result<Listing> {
        let refs: Vec<PostRef> = self
            .source
            .list_posts()
            .await?
            .into_iter()
            .filter(|post_ref| {
                if !post_ref.is_file() {
                    tracing::debug!("Skipping {} entry {}", post_ref.kind, post_ref.name);
                }
                post_ref.is_file()
            })
            .collect();

        let concurrency = self.config.http.concurrency.max(1);
        tracing::debug!("Fetching {} posts, {} at a time", refs.len(), concurrency);

        let mut results = pin!(stream::iter(refs)
            .map(|post_ref| async move { self.list_entry(&post_ref).await })
            .buffered(concurrency));

        let mut listing = Listing::default();
        while let Some(result) = results.next().await {
            match result {
                Ok(entry) => listing.entries.push(entry),
                Err(err) => {
                    listing.failure = Some(err);
                    break;
                }
            }
        }

        Ok(listing)
    }

    async fn list_entry(&self, post_ref: &PostRef) -> Result<ListEntry> {
        let url = post_ref
            .download_url
            .as_deref()
            .ok_or_else(|| BlogError::MissingDownloadUrl {
                name: post_ref.name.clone(),
            })?;

        let raw = self.source.fetch_raw(url).await?;
        let post = Post::parse(&post_ref.name, &raw, &self.config.front_matter);
        let excerpt = render_excerpt(
            self.converter.as_ref(),
            &post.body,
            self.config.excerpt_length,
        )?;

        Ok(ListEntry {
            href: post_href(&html_name(&post_ref.name)),
            date: self.display_date(&post),
            title: post.title,
            excerpt,
        })
    }

    /// Render the full listing page.
    ///
    /// A post that fails to load ends the list; the posts before it are
    /// still rendered.
    pub async fn render_listing_page(&self) -> Result<String> {
        let listing = self.listing().await?;
        if let Some(err) = &listing.failure {
            tracing::error!(
                "Listing stopped after {} posts: {}",
                listing.entries.len(),
                err
            );
        }
        tracing::info!("Rendered listing with {} posts", listing.entries.len());
        self.renderer.render_index(&self.site, &listing.entries)
    }
}
