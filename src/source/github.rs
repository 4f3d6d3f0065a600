//! GitHub-backed post source

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use std::time::Duration;

use super::PostSource;
use crate::config::{GitHubConfig, HttpConfig};
use crate::content::PostRef;
use crate::error::{BlogError, Result};

/// Reads posts through the contents API and raw.githubusercontent.com
pub struct GitHubSource {
    client: Client,
    config: GitHubConfig,
}

impl GitHubSource {
    /// Create a new GitHub source
    pub fn new(config: &GitHubConfig, http: &HttpConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(token) = &config.token {
            if let Ok(mut value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            } else {
                tracing::warn!("Ignoring GitHub token with invalid header characters");
            }
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .user_agent(http.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| BlogError::Http {
                url: config.api_url.clone(),
                source: e,
            })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BlogError::Http {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BlogError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| BlogError::Http {
                url: url.to_string(),
                source: e,
            })
    }
}

#[async_trait]
impl PostSource for GitHubSource {
    async fn list_posts(&self) -> Result<Vec<PostRef>> {
        let url = self.config.listing_url();
        let posts: Vec<PostRef> = self
            .get(&url)
            .await?
            .json()
            .await
            .map_err(|e| BlogError::Decode {
                url: url.clone(),
                source: e,
            })?;

        tracing::info!("Found {} entries in {}", posts.len(), self.config.posts_dir);
        Ok(posts)
    }

    async fn fetch_raw(&self, url: &str) -> Result<String> {
        self.get_text(url).await
    }

    async fn fetch_post(&self, name: &str) -> Result<String> {
        let url = self.config.raw_post_url(name);
        self.get_text(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer, token: Option<&str>) -> GitHubSource {
        let config = GitHubConfig {
            owner: "octo".to_string(),
            repo: "blog".to_string(),
            branch: "main".to_string(),
            api_url: server.uri(),
            raw_url: format!("{}/raw", server.uri()),
            token: token.map(|t| t.to_string()),
            ..Default::default()
        };
        GitHubSource::new(&config, &HttpConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_list_posts() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/blog/contents/_posts"))
            .and(header("accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "b.md", "type": "file", "path": "_posts/b.md",
                 "download_url": format!("{}/raw/b.md", server.uri())},
                {"name": "a.md", "type": "file", "path": "_posts/a.md",
                 "download_url": format!("{}/raw/a.md", server.uri())}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let source = source_for(&server, None);
        let posts = source.list_posts().await.unwrap();
        let names: Vec<_> = posts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b.md", "a.md"]);
    }

    #[tokio::test]
    async fn test_list_posts_sends_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/blog/contents/_posts"))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let source = source_for(&server, Some("s3cret"));
        assert!(source.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_posts_bad_json() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/blog/contents/_posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Not an array"
            })))
            .mount(&server)
            .await;

        let source = source_for(&server, None);
        let err = source.list_posts().await.unwrap_err();
        assert!(matches!(err, BlogError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_fetch_post() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/raw/octo/blog/main/_posts/a.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("---\ntitle: A\n---\nHi"))
            .expect(1)
            .mount(&server)
            .await;

        let source = source_for(&server, None);
        let raw = source.fetch_post("a.md").await.unwrap();
        assert_eq!(raw, "---\ntitle: A\n---\nHi");
    }

    #[tokio::test]
    async fn test_fetch_post_escapes_name() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/raw/octo/blog/main/_posts/c%23sharp%20tips.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("---\ntitle: C#\n---\nHi"))
            .expect(1)
            .mount(&server)
            .await;

        let source = source_for(&server, None);
        let raw = source.fetch_post("c#sharp tips.md").await.unwrap();
        assert_eq!(raw, "---\ntitle: C#\n---\nHi");
    }

    #[tokio::test]
    async fn test_fetch_raw_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/raw/missing.md"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = source_for(&server, None);
        let url = format!("{}/raw/missing.md", server.uri());
        match source.fetch_raw(&url).await {
            Err(BlogError::Status { status, .. }) => assert_eq!(status.as_u16(), 404),
            other => panic!("expected status error, got {:?}", other),
        }
    }
}
