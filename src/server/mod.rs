//! HTTP server for the listing and detail pages

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::generator::Generator;
use crate::Blog;

/// Server state
struct ServerState {
    generator: Generator,
}

/// Query string of the detail page
#[derive(Debug, Deserialize)]
struct PostQuery {
    post: Option<String>,
}

/// Failure while fetching or rendering a page
struct PageError(crate::error::BlogError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("Failed to render page: {}", self.0);
        (StatusCode::BAD_GATEWAY, "Failed to load posts").into_response()
    }
}

impl From<crate::error::BlogError> for PageError {
    fn from(err: crate::error::BlogError) -> Self {
        Self(err)
    }
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16, open: bool) -> Result<()> {
    let generator = blog.generator()?;
    let app = router(generator, blog.static_dir.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router: pages are rendered per request, anything else comes from `static_dir`
fn router(generator: Generator, static_dir: PathBuf) -> Router {
    let state = Arc::new(ServerState { generator });

    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/post.html", get(post_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Listing page
async fn index_handler(State(state): State<Arc<ServerState>>) -> Result<Html<String>, PageError> {
    Ok(Html(state.generator.render_listing_page().await?))
}

/// Detail page
async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<PostQuery>,
) -> Result<Response, PageError> {
    let detail = state.generator.detail(query.post.as_deref()).await?;
    let html = state.generator.render_detail(&detail)?;

    let status = if detail.is_found() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Html(html)).into_response())
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
