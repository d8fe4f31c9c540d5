//! Static asset endpoints.
//!
//! # Routes
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /assets/logo | GET | Site logo (override file, else the embedded default) |
//! | /assets/video | GET | Footer video (override file, 404 when absent) |
//!
//! Responses are immutable for a year and carry a permissive CORS
//! header so other origins may embed them directly.

use crate::core::Storefront;
use axum::{Router, extract::State, response::IntoResponse, routing::get};
use http::header;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default logo compiled into the binary, served when the static
/// directory has no `logo.svg` override
const EMBEDDED_LOGO: &[u8] = include_bytes!("../../static/logo.svg");

const CACHE_FOREVER: &str = "public, max-age=31536000, immutable";

pub fn router() -> Router<Arc<Storefront>> {
    Router::new()
        .route("/assets/logo", get(serve_logo))
        .route("/assets/video", get(serve_video))
}

enum AssetResponse {
    Ok(Vec<u8>, String),
    NotFound,
}

impl IntoResponse for AssetResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            AssetResponse::Ok(content, content_type) => (
                http::StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CACHE_CONTROL, CACHE_FOREVER.to_string()),
                    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string()),
                ],
                content,
            )
                .into_response(),
            AssetResponse::NotFound => {
                (http::StatusCode::NOT_FOUND, "Asset not found").into_response()
            }
        }
    }
}

fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path).first_or_octet_stream().to_string()
}

async fn serve_logo(State(session): State<Arc<Storefront>>) -> AssetResponse {
    let path = PathBuf::from(&session.config().static_dir).join("logo.svg");

    match tokio::fs::read(&path).await {
        Ok(content) => AssetResponse::Ok(content, content_type_for(&path)),
        Err(_) => AssetResponse::Ok(EMBEDDED_LOGO.to_vec(), "image/svg+xml".to_string()),
    }
}

async fn serve_video(State(session): State<Arc<Storefront>>) -> AssetResponse {
    let path = PathBuf::from(&session.config().static_dir).join("footervid.mp4");

    match tokio::fs::read(&path).await {
        Ok(content) => AssetResponse::Ok(content, content_type_for(&path)),
        Err(err) => {
            tracing::warn!(path = %path.display(), "Footer video not served: {err}");
            AssetResponse::NotFound
        }
    }
}
