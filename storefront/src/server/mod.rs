//! HTTP surface.
//!
//! The storefront serves only its own static assets and a health
//! probe; catalog reads and admin mutations go straight to the hosted
//! backend, not through this server.
//!
//! # Routes
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /health | GET | Liveness, catalog source, product count |
//! | /assets/logo | GET | Site logo |
//! | /assets/video | GET | Footer video |

pub mod static_assets;

use crate::catalog::CatalogSource;
use crate::core::Storefront;
use axum::{Json, Router, extract::State, middleware, routing::get};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

/// Request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

/// Build the router (without state)
pub fn build_app() -> Router<Arc<Storefront>> {
    Router::new()
        .route("/health", get(health))
        .merge(static_assets::router())
}

/// Bind state and middleware into a serveable app
pub fn into_service(session: Arc<Storefront>) -> Router {
    build_app()
        .with_state(session)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// Serve until the shutdown token fires
pub async fn serve(app: Router, port: u16, shutdown: CancellationToken) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Asset server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}

#[derive(Serialize)]
struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    /// remote | fallback
    catalog_source: &'static str,
    products: usize,
}

async fn health(State(session): State<Arc<Storefront>>) -> Json<HealthResponse> {
    let catalog = session.catalog();
    let (status, source) = match catalog.source() {
        CatalogSource::Remote => ("ok", "remote"),
        CatalogSource::Fallback => ("degraded", "fallback"),
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        catalog_source: source,
        products: catalog.products().len(),
    })
}
