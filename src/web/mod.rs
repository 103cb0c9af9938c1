//! Static host for the built single-page app.
//!
//! Files under the dist directory are served as-is; any other path falls back
//! to `index.html` so client-side routes survive a reload. `/health` and
//! `/routes` expose build metadata and the flattened route table.

pub mod handlers;

use crate::router::RouteTable;
use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Method, Request},
    routing::get,
    Extension, Router,
};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    services::{ServeDir, ServeFile},
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, warn, Span};
use ulid::Ulid;

#[derive(Clone, Debug)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
    pub dist: PathBuf,
}

/// Build the host router.
#[must_use]
pub fn router(table: Arc<RouteTable>, dist: &Path) -> Router {
    let spa = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD])
        .allow_origin(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/routes", get(handlers::routes))
        .fallback_service(spa)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(table)),
        )
}

/// Start the host
/// # Errors
/// Return error if the listener cannot be bound or the server fails
pub async fn new(config: ServeConfig, table: Arc<RouteTable>) -> Result<()> {
    let index = config.dist.join("index.html");
    if !index.is_file() {
        warn!(
            "{} not found, client-side routes will answer 404",
            index.display()
        );
    }

    let app = router(table, &config.dist);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    info!("Gracefully shutdown");
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
