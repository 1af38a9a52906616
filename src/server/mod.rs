//! Blog HTTP server
//!
//! Two routes: the listing page and the post page. The collection is built
//! once before the server starts and shared read-only across requests, so
//! request handling needs no locking.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::access::{self, Access, Viewer};
use crate::config::SiteConfig;
use crate::content::PostCollection;
use crate::templates::TemplateRenderer;
use crate::Minipress;

/// Server state shared across requests
struct ServerState {
    config: SiteConfig,
    collection: PostCollection,
    templates: TemplateRenderer,
}

/// Build the post collection and serve it.
///
/// A build error is fatal here: the server never starts over invalid content.
pub async fn start(app: &Minipress, ip: &str, port: u16) -> Result<()> {
    let collection = app.build()?;
    tracing::info!("serving {} posts", collection.len());

    let state = Arc::new(ServerState {
        config: app.config.clone(),
        collection,
        templates: TemplateRenderer::new()?,
    });

    let router = Router::new()
        .route("/", get(list_posts))
        .route("/:slug", get(show_post))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Blog running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Listing route. No gate applies here: the listing shows metadata only.
async fn list_posts(State(state): State<Arc<ServerState>>) -> Response {
    match state
        .templates
        .render_index(&state.config, state.collection.list_all())
    {
        Ok(page) => Html(page).into_response(),
        Err(e) => render_failure(e),
    }
}

/// Detail route: resolve the slug, then gate, then render.
async fn show_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    let Some(post) = state.collection.find_by_slug(&slug) else {
        tracing::debug!("no post for slug {:?}", slug);
        return match state.templates.render_not_found(&state.config) {
            Ok(page) => (StatusCode::NOT_FOUND, Html(page)).into_response(),
            Err(e) => render_failure(e),
        };
    };

    let viewer = extract_viewer(&headers, &state.config.auth.viewer_header);
    match access::check(post, viewer.as_ref()) {
        Access::Forbidden => match state.templates.render_login(&state.config) {
            Ok(page) => (StatusCode::UNAUTHORIZED, Html(page)).into_response(),
            Err(e) => render_failure(e),
        },
        Access::Visible => match state.templates.render_post(&state.config, post) {
            Ok(page) => Html(page).into_response(),
            Err(e) => render_failure(e),
        },
    }
}

/// Read the viewer identity resolved by the external auth collaborator.
///
/// The header is trusted as-is; an absent or empty value means no viewer.
fn extract_viewer(headers: &HeaderMap, header: &str) -> Option<Viewer> {
    let value = headers.get(header)?.to_str().ok()?.trim();
    if value.is_empty() {
        return None;
    }
    Some(Viewer {
        name: value.to_string(),
    })
}

fn render_failure(err: anyhow::Error) -> Response {
    tracing::error!("template rendering failed: {:#}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}
