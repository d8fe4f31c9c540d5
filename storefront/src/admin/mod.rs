//! Admin panel: password gate, persisted login session, and the
//! mutation surface for products, hero images, and site assets.
//!
//! Every mutation goes through the backend first and, on success,
//! triggers a full catalog re-fetch; nothing is patched into local
//! state optimistically. Write failures are surfaced to the operator,
//! unlike read failures which degrade silently elsewhere.
//!
//! The password gate is a plain string comparison against the
//! configured value. It keeps casual visitors out of the panel and is
//! documented as exactly that, not a security boundary.

pub mod edit;

pub use edit::{EditPhase, EditSession, EditTarget};

use crate::catalog::{CatalogStore, merge_promo_order};
use crate::prefs::{KEY_ADMIN_SESSION, Prefs, PrefsError};
use grit_client::{
    ASSETS_BUCKET, GatewayError, HERO_IMAGES_BUCKET, PRODUCT_IMAGES_BUCKET, StoreGateway,
};
use serde::{Deserialize, Serialize};
use shared::{
    AssetKind, HeroImage, HeroImageCreate, HeroImageUpdate, Product, ProductCreate, ProductUpdate,
};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;


/// How long a login stays valid
pub const SESSION_TTL: Duration = Duration::from_secs(8 * 60 * 60);

#[derive(Debug, Error)]
pub enum AdminError {
    /// Wrong password, or no valid session for a gated operation
    #[error("Not authenticated")]
    NotAuthenticated,

    /// A product form is already open
    #[error("Another edit is already in progress")]
    EditInProgress,

    /// Save requested with no open form
    #[error("No edit in progress")]
    NoActiveEdit,

    /// Draft failed validation before reaching the backend
    #[error("Invalid draft: {0}")]
    InvalidDraft(String),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Preference store error: {0}")]
    Prefs(#[from] PrefsError),
}

pub type AdminResult<T> = Result<T, AdminError>;

/// Persisted login record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    /// Unix seconds of the successful password check
    pub logged_in_at: u64,
}

impl AdminSession {
    /// Valid for [`SESSION_TTL`] from login. Pure in `(record, now)` so
    /// expiry is testable without a clock.
    pub fn is_valid_at(&self, now: u64) -> bool {
        now < self.logged_in_at.saturating_add(SESSION_TTL.as_secs())
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Uploads get a timestamp prefix so names never collide and listings
/// sort by recency without extra metadata
fn timestamped_name(original: &str) -> String {
    format!("{}-{}", now_millis(), original)
}

/// Gated mutation surface over the gateway, catalog, and prefs
pub struct AdminPanel {
    gateway: Arc<dyn StoreGateway>,
    catalog: Arc<CatalogStore>,
    prefs: Prefs,
    password: String,
}

impl AdminPanel {
    pub fn new(
        gateway: Arc<dyn StoreGateway>,
        catalog: Arc<CatalogStore>,
        prefs: Prefs,
        password: String,
    ) -> Self {
        Self {
            gateway,
            catalog,
            prefs,
            password,
        }
    }

    // ========== Session Gate ==========

    /// Compare the entered password and persist a fresh session record
    pub fn login(&self, password: &str) -> AdminResult<()> {
        if password != self.password {
            tracing::warn!("Admin login rejected");
            return Err(AdminError::NotAuthenticated);
        }

        let session = AdminSession {
            logged_in_at: now_secs(),
        };
        self.prefs.put_json(KEY_ADMIN_SESSION, &session)?;
        tracing::info!("Admin logged in");
        Ok(())
    }

    /// Check the persisted record; an expired record is cleared so the
    /// next check does not re-read a stale session
    pub fn is_authenticated(&self) -> bool {
        let record: Option<AdminSession> = match self.prefs.get_json(KEY_ADMIN_SESSION) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!("Admin session unreadable: {err}");
                return false;
            }
        };

        match record {
            Some(session) if session.is_valid_at(now_secs()) => true,
            Some(_) => {
                if let Err(err) = self.prefs.remove(KEY_ADMIN_SESSION) {
                    tracing::warn!("Failed to clear expired admin session: {err}");
                }
                tracing::info!("Admin session expired, cleared");
                false
            }
            None => false,
        }
    }

    pub fn logout(&self) -> AdminResult<()> {
        self.prefs.remove(KEY_ADMIN_SESSION)?;
        tracing::info!("Admin logged out");
        Ok(())
    }

    fn require_session(&self) -> AdminResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(AdminError::NotAuthenticated)
        }
    }

    // ========== Products ==========

    /// Full product list for the admin table, hidden rows included
    pub async fn products(&self) -> AdminResult<Vec<Product>> {
        self.require_session()?;
        Ok(self.gateway.fetch_products_admin().await?)
    }

    /// Open a creation form
    pub fn begin_create(&self, session: &mut EditSession, draft: ProductCreate) -> AdminResult<()> {
        self.require_session()?;
        session.begin(EditTarget::New(draft))
    }

    /// Open an update form for an existing product
    pub fn begin_update(
        &self,
        session: &mut EditSession,
        id: i64,
        changes: ProductUpdate,
    ) -> AdminResult<()> {
        self.require_session()?;
        session.begin(EditTarget::Existing(id, changes))
    }

    /// Save the open form. On success the catalog is re-fetched and the
    /// form closes; on failure the form stays open with its draft.
    pub async fn save_edit(&self, session: &mut EditSession) -> AdminResult<Product> {
        self.require_session()?;
        let target = session.start_saving()?;

        match self.apply(target).await {
            Ok(product) => {
                session.finish_save();
                self.catalog.refresh().await;
                tracing::info!(product_id = product.id, "Product saved");
                Ok(product)
            }
            Err(err) => {
                session.fail_save();
                tracing::error!("Product save failed: {err}");
                Err(err)
            }
        }
    }

    async fn apply(&self, target: EditTarget) -> AdminResult<Product> {
        match target {
            EditTarget::New(draft) => {
                validate_create(&draft)?;
                Ok(self.gateway.insert_product(draft).await?)
            }
            EditTarget::Existing(id, changes) => {
                validate_update(&changes)?;
                Ok(self.gateway.update_product(id, changes).await?)
            }
        }
    }

    /// Deletion skips the form lifecycle; it is immediate and permanent
    pub async fn delete_product(&self, id: i64) -> AdminResult<()> {
        self.require_session()?;
        match self.gateway.delete_product(id).await {
            Ok(()) => {
                self.catalog.refresh().await;
                tracing::info!(product_id = id, "Product deleted");
                Ok(())
            }
            Err(err) => {
                tracing::error!(product_id = id, "Product delete failed: {err}");
                Err(err.into())
            }
        }
    }

    // ========== Uploads ==========

    /// Store a product image and return the public URL to put in the
    /// product's `image_url`
    pub async fn upload_product_image(
        &self,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> AdminResult<String> {
        self.require_session()?;
        let name = timestamped_name(original_name);
        match self
            .gateway
            .upload_object(PRODUCT_IMAGES_BUCKET, &name, bytes)
            .await
        {
            Ok(url) => {
                tracing::info!(object = %name, "Product image uploaded");
                Ok(url)
            }
            Err(err) => {
                tracing::error!(object = %name, "Product image upload failed: {err}");
                Err(err.into())
            }
        }
    }

    /// Store a site asset. The object name carries the kind prefix so
    /// later listings classify it by name alone.
    pub async fn upload_asset(
        &self,
        kind: AssetKind,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> AdminResult<String> {
        self.require_session()?;
        let name = format!("{}-{}", kind.as_str(), timestamped_name(original_name));
        match self.gateway.upload_object(ASSETS_BUCKET, &name, bytes).await {
            Ok(url) => {
                tracing::info!(object = %name, kind = kind.as_str(), "Asset uploaded");
                Ok(url)
            }
            Err(err) => {
                tracing::error!(object = %name, "Asset upload failed: {err}");
                Err(err.into())
            }
        }
    }

    // ========== Hero Carousel ==========

    /// All hero rows for the panel, active filter applied by the backend
    pub async fn hero_images(&self) -> AdminResult<Vec<HeroImage>> {
        self.require_session()?;
        Ok(self.gateway.fetch_hero_images().await?)
    }

    /// Store a hero binary and return `(object_name, public_url)` for
    /// the row that will reference it
    pub async fn upload_hero_image(
        &self,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> AdminResult<(String, String)> {
        self.require_session()?;
        let name = timestamped_name(original_name);
        match self
            .gateway
            .upload_object(HERO_IMAGES_BUCKET, &name, bytes)
            .await
        {
            Ok(url) => {
                tracing::info!(object = %name, "Hero image uploaded");
                Ok((name, url))
            }
            Err(err) => {
                tracing::error!(object = %name, "Hero image upload failed: {err}");
                Err(err.into())
            }
        }
    }

    pub async fn create_hero_image(&self, draft: HeroImageCreate) -> AdminResult<HeroImage> {
        self.require_session()?;
        let row = self.gateway.insert_hero_image(draft).await.map_err(|err| {
            tracing::error!("Hero image create failed: {err}");
            err
        })?;
        tracing::info!(hero_id = row.id, "Hero image created");
        Ok(row)
    }

    pub async fn update_hero_image(
        &self,
        id: i64,
        changes: HeroImageUpdate,
    ) -> AdminResult<HeroImage> {
        self.require_session()?;
        let row = self
            .gateway
            .update_hero_image(id, changes)
            .await
            .map_err(|err| {
                tracing::error!(hero_id = id, "Hero image update failed: {err}");
                err
            })?;
        tracing::info!(hero_id = id, "Hero image updated");
        Ok(row)
    }

    /// Delete the row, then its storage object. A leftover object after
    /// a failed object delete is logged and tolerated.
    pub async fn delete_hero_image(&self, image: &HeroImage) -> AdminResult<()> {
        self.require_session()?;
        self.gateway
            .delete_hero_image(image.id)
            .await
            .map_err(|err| {
                tracing::error!(hero_id = image.id, "Hero image delete failed: {err}");
                err
            })?;

        if let Some(name) = &image.image_file_name
            && let Err(err) = self.gateway.delete_object(HERO_IMAGES_BUCKET, name).await
        {
            tracing::warn!(object = %name, "Hero image object not removed: {err}");
        }

        tracing::info!(hero_id = image.id, "Hero image deleted");
        Ok(())
    }

    // ========== Promo Ordering ==========

    /// Persist the drag-reorder result, merged ahead of whatever order
    /// was stored before so unmoved entries keep their place
    pub fn set_promo_order(&self, window_ids: &[i64]) -> AdminResult<()> {
        self.require_session()?;
        let stored = self.prefs.promo_order()?;
        let merged = merge_promo_order(window_ids, &stored);
        self.prefs.set_promo_order(&merged)?;
        tracing::info!(count = merged.len(), "Promo order saved");
        Ok(())
    }
}

fn validate_create(draft: &ProductCreate) -> AdminResult<()> {
    if draft.name.trim().is_empty() {
        return Err(AdminError::InvalidDraft("name is required".to_string()));
    }
    if draft.price < 0.0 || draft.original_price < 0.0 {
        return Err(AdminError::InvalidDraft(
            "price must not be negative".to_string(),
        ));
    }
    if !(0..=100).contains(&draft.discount) {
        return Err(AdminError::InvalidDraft(
            "discount must be within 0-100".to_string(),
        ));
    }
    Ok(())
}

fn validate_update(changes: &ProductUpdate) -> AdminResult<()> {
    if let Some(name) = &changes.name
        && name.trim().is_empty()
    {
        return Err(AdminError::InvalidDraft("name is required".to_string()));
    }
    let negative_price = matches!(changes.price, Some(p) if p < 0.0)
        || matches!(changes.original_price, Some(p) if p < 0.0);
    if negative_price {
        return Err(AdminError::InvalidDraft(
            "price must not be negative".to_string(),
        ));
    }
    if matches!(changes.discount, Some(d) if !(0..=100).contains(&d)) {
        return Err(AdminError::InvalidDraft(
            "discount must be within 0-100".to_string(),
        ));
    }
    Ok(())
}
