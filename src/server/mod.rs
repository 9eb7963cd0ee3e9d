//! JSON query server over the resolved posts

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::commands::watch::watch_content;
use crate::config::SiteConfig;
use crate::content::{ordered_archive, Resolver};
use crate::Folio;

/// Server state
struct ServerState {
    resolver: Resolver,
}

/// Start the query server
///
/// Paths outside `/api` are served as static files from the site
/// directory, which is where derived banner URLs point.
pub async fn start(folio: &Folio, ip: &str, port: u16, watch: bool) -> Result<()> {
    let state = Arc::new(ServerState {
        resolver: folio.resolver(),
    });

    let app = router(Arc::clone(&state))
        .fallback_service(ServeDir::new(&folio.base_dir))
        .layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    print!("{}", startup_banner(&folio.config, ip, port));

    if watch {
        let content_dir = folio.content_dir.clone();
        let state = Arc::clone(&state);
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_content(&content_dir, || state.resolver.invalidate()) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Startup lines naming the site, its public URL and the local address
fn startup_banner(config: &SiteConfig, ip: &str, port: u16) -> String {
    let mut out = String::new();
    if config.author.is_empty() {
        out.push_str(&format!("{}\n", config.title));
    } else {
        out.push_str(&format!("{} by {}\n", config.title, config.author));
    }
    out.push_str(&format!("Site URL: {}\n", config.url));
    out.push_str(&format!("Server running at http://{}:{}\n", ip, port));
    out.push_str(&format!("Mode: {:?}\n", config.mode));
    out.push_str("Press Ctrl+C to stop.\n");
    out
}

fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/posts", get(all_posts_handler))
        .route("/api/posts/featured", get(featured_posts_handler))
        .route("/api/posts/:id", get(post_handler))
        .route("/api/archive", get(archive_handler))
        .with_state(state)
}

/// Run a resolver query off the async runtime, since resolution reads files
async fn query<F>(state: Arc<ServerState>, f: F) -> Response
where
    F: FnOnce(&Resolver) -> Response + Send + 'static,
{
    match tokio::task::spawn_blocking(move || f(&state.resolver)).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Query task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

async fn all_posts_handler(State(state): State<Arc<ServerState>>) -> Response {
    query(state, all_posts).await
}

async fn featured_posts_handler(State(state): State<Arc<ServerState>>) -> Response {
    query(state, featured_posts).await
}

async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Response {
    query(state, move |resolver| post_by_id(resolver, &id)).await
}

async fn archive_handler(State(state): State<Arc<ServerState>>) -> Response {
    query(state, archive).await
}

fn all_posts(resolver: &Resolver) -> Response {
    let posts = resolver.get_all();
    Json(posts.as_slice()).into_response()
}

fn featured_posts(resolver: &Resolver) -> Response {
    Json(resolver.get_featured()).into_response()
}

fn post_by_id(resolver: &Resolver, id: &str) -> Response {
    match resolver.get_by_id(id) {
        Some(post) => Json(post).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "not found", "id": id })),
        )
            .into_response(),
    }
}

fn archive(resolver: &Resolver) -> Response {
    let posts = resolver.get_all();
    Json(ordered_archive(&posts)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CachePolicy;
    use crate::content::{MemorySources, ResolveOptions};

    fn resolver() -> Resolver {
        let sources = MemorySources::new()
            .with("2024-01-05_first.md", "---\nfeatured: true\n---\nFirst")
            .with("2024-02-10_second.md", "Second");
        Resolver::new(sources, ResolveOptions::default(), CachePolicy::CacheForever)
    }

    #[test]
    fn test_post_by_id_found() {
        let response = post_by_id(&resolver(), "2024-01-05_first");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_post_by_id_not_found() {
        let response = post_by_id(&resolver(), "does-not-exist");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_startup_banner() {
        let mut config = SiteConfig {
            title: "Notes".to_string(),
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        let out = startup_banner(&config, "localhost", 4000);
        assert!(out.starts_with("Notes\nSite URL: https://example.com\n"));
        assert!(out.contains("Server running at http://localhost:4000\n"));

        config.author = "Ada".to_string();
        let out = startup_banner(&config, "0.0.0.0", 8080);
        assert!(out.starts_with("Notes by Ada\n"));
        assert!(out.contains("http://0.0.0.0:8080"));
    }

    #[test]
    fn test_list_endpoints_ok() {
        let resolver = resolver();
        assert_eq!(all_posts(&resolver).status(), StatusCode::OK);
        assert_eq!(featured_posts(&resolver).status(), StatusCode::OK);
        assert_eq!(archive(&resolver).status(), StatusCode::OK);
    }
}
