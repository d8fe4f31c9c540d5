//! Asset resolution.
//!
//! Logo and footer video URLs resolve against the uploaded-assets bucket
//! and degrade to the storefront's own static endpoints when the backend
//! cannot answer. Listing and deletion of uploaded assets are fail-soft:
//! a failure degrades to an empty list or a no-op and is surfaced
//! through [`AssetLibrary::last_error`], never as an `Err` to the
//! caller. The compiled-in fallbacks are never persisted as assets.

pub mod hero;

pub use hero::{MAX_SLIDES, carousel_slides, default_slides};

use chrono::{DateTime, FixedOffset};
use grit_client::{ASSETS_BUCKET, StoreGateway};
use parking_lot::RwLock;
use shared::{AssetKind, CarouselSlide, StoredAsset};
use std::cmp::Reverse;
use std::sync::Arc;

/// Served by the storefront itself when no uploaded logo resolves
pub const DEFAULT_LOGO_PATH: &str = "/assets/logo";
/// Served by the storefront itself when no uploaded video resolves
pub const DEFAULT_VIDEO_PATH: &str = "/assets/video";

/// Fail-soft view over the uploaded-assets bucket
pub struct AssetLibrary {
    gateway: Arc<dyn StoreGateway>,
    logo_url: RwLock<String>,
    video_url: RwLock<String>,
    last_error: RwLock<Option<String>>,
}

impl AssetLibrary {
    pub fn new(gateway: Arc<dyn StoreGateway>) -> Self {
        Self {
            gateway,
            logo_url: RwLock::new(DEFAULT_LOGO_PATH.to_string()),
            video_url: RwLock::new(DEFAULT_VIDEO_PATH.to_string()),
            last_error: RwLock::new(None),
        }
    }

    /// Resolve the current logo URL, caching it for synchronous readers
    pub async fn resolve_logo(&self) -> String {
        let url = match self.current_of_kind(AssetKind::Logo).await {
            Some(asset) => asset.url,
            None => DEFAULT_LOGO_PATH.to_string(),
        };
        *self.logo_url.write() = url.clone();
        url
    }

    /// Resolve the current footer video URL
    pub async fn resolve_video(&self) -> String {
        let url = match self.current_of_kind(AssetKind::Video).await {
            Some(asset) => asset.url,
            None => DEFAULT_VIDEO_PATH.to_string(),
        };
        *self.video_url.write() = url.clone();
        url
    }

    /// Most recently updated uploaded object of the given kind.
    /// Objects without a parseable timestamp sort last.
    async fn current_of_kind(&self, kind: AssetKind) -> Option<StoredAsset> {
        let mut candidates: Vec<StoredAsset> = self
            .list_uploaded()
            .await
            .into_iter()
            .filter(|asset| asset.kind() == kind)
            .collect();
        candidates.sort_by_key(|asset| Reverse(updated_instant(asset)));
        candidates.into_iter().next()
    }

    /// Uploaded assets; a listing failure degrades to an empty list
    pub async fn list_uploaded(&self) -> Vec<StoredAsset> {
        match self.gateway.list_objects(ASSETS_BUCKET).await {
            Ok(assets) => {
                *self.last_error.write() = None;
                assets
            }
            Err(err) => {
                tracing::warn!("Asset listing failed: {err}");
                *self.last_error.write() = Some(err.to_string());
                Vec::new()
            }
        }
    }

    /// Delete an uploaded asset; a failure is a no-op
    pub async fn delete_uploaded(&self, name: &str) -> bool {
        match self.gateway.delete_object(ASSETS_BUCKET, name).await {
            Ok(()) => {
                *self.last_error.write() = None;
                true
            }
            Err(err) => {
                tracing::warn!(name = %name, "Asset deletion failed: {err}");
                *self.last_error.write() = Some(err.to_string());
                false
            }
        }
    }

    /// Active hero rows mapped to carousel slides; a fetch failure gives
    /// the default slides
    pub async fn hero_slides(&self) -> Vec<CarouselSlide> {
        match self.gateway.fetch_hero_images().await {
            Ok(rows) => carousel_slides(&rows),
            Err(err) => {
                tracing::warn!("Hero image fetch failed, using default slides: {err}");
                *self.last_error.write() = Some(err.to_string());
                hero::default_slides()
            }
        }
    }

    /// Last resolved logo URL (default path until a resolution succeeds)
    pub fn logo_url(&self) -> String {
        self.logo_url.read().clone()
    }

    /// Last resolved video URL (default path until a resolution succeeds)
    pub fn video_url(&self) -> String {
        self.video_url.read().clone()
    }

    /// Error from the most recent bucket operation, if it failed
    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }
}

/// Storage timestamps arrive as RFC 3339 strings with varying precision
/// and offsets, so string order is not time order.
fn updated_instant(asset: &StoredAsset) -> Option<DateTime<FixedOffset>> {
    asset
        .updated_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
}
