//! Catalog state.
//!
//! Holds the working product list for the process lifetime. Bootstrap
//! races the gateway fetch against a fixed timeout; whichever settles
//! first wins and the loser is dropped, so a late fetch can never
//! overwrite data already installed. After bootstrap the list changes
//! only through [`CatalogStore::refresh`], which replaces it wholesale
//! after an admin mutation.

pub mod fallback;
pub mod filter;
pub mod promo;

pub use fallback::sample_catalog;
pub use filter::visible_products;
pub use promo::{PROMO_WINDOW, merge_promo_order, promo_window, secondary_window};

use grit_client::StoreGateway;
use parking_lot::RwLock;
use shared::{Category, Product};
use std::sync::Arc;
use std::time::Duration;


/// Where the current product list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Live rows from the backend
    Remote,
    /// Compiled-in sample catalog
    Fallback,
}

/// In-memory product list with fallback-racing bootstrap
pub struct CatalogStore {
    gateway: Arc<dyn StoreGateway>,
    products: RwLock<Vec<Product>>,
    source: RwLock<CatalogSource>,
    fetch_timeout: Duration,
}

impl CatalogStore {
    pub fn new(gateway: Arc<dyn StoreGateway>, fetch_timeout: Duration) -> Self {
        Self {
            gateway,
            products: RwLock::new(Vec::new()),
            source: RwLock::new(CatalogSource::Fallback),
            fetch_timeout,
        }
    }

    /// Load the initial product list, racing the gateway against the
    /// bootstrap timeout. Converges exactly once per call: on timeout
    /// the in-flight fetch is dropped, not awaited later.
    pub async fn bootstrap(&self) -> CatalogSource {
        let fetched = tokio::select! {
            result = self.gateway.fetch_products() => match result {
                Ok(rows) => Some(rows),
                Err(err) => {
                    tracing::warn!("Catalog fetch failed, using sample data: {err}");
                    None
                }
            },
            _ = tokio::time::sleep(self.fetch_timeout) => {
                tracing::warn!(
                    timeout_ms = self.fetch_timeout.as_millis() as u64,
                    "Catalog fetch timed out, using sample data"
                );
                None
            }
        };

        self.install(fetched)
    }

    /// Replace the list after an admin mutation. No timeout race here;
    /// the mutation already waited on the backend.
    pub async fn refresh(&self) -> CatalogSource {
        let fetched = match self.gateway.fetch_products().await {
            Ok(rows) => Some(rows),
            Err(err) => {
                tracing::warn!("Catalog refresh failed, using sample data: {err}");
                None
            }
        };

        self.install(fetched)
    }

    /// An empty result set is treated like an outage: the storefront
    /// always has something to show.
    fn install(&self, fetched: Option<Vec<Product>>) -> CatalogSource {
        let (rows, source) = match fetched {
            Some(rows) if !rows.is_empty() => (rows, CatalogSource::Remote),
            _ => (sample_catalog(), CatalogSource::Fallback),
        };

        tracing::info!(count = rows.len(), source = ?source, "Catalog installed");
        *self.products.write() = rows;
        *self.source.write() = source;
        source
    }

    /// Snapshot of the full catalog, hidden products included
    pub fn products(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    pub fn source(&self) -> CatalogSource {
        *self.source.read()
    }

    /// Find a product in the in-memory list
    pub fn find(&self, id: i64) -> Option<Product> {
        self.products.read().iter().find(|p| p.id == id).cloned()
    }

    /// Resolve a product by id for the detail page: gateway first, then
    /// the sample catalog. Gateway failure and a missing row both
    /// degrade to the sample lookup; `None` means nobody knows the id.
    pub async fn lookup(&self, id: i64) -> Option<Product> {
        match self.gateway.fetch_product_by_id(id).await {
            Ok(Some(product)) => Some(product),
            Ok(None) => sample_catalog().into_iter().find(|p| p.id == id),
            Err(err) => {
                tracing::warn!(product_id = id, "Product lookup failed, trying sample data: {err}");
                sample_catalog().into_iter().find(|p| p.id == id)
            }
        }
    }

    /// Visible set for the storefront grid
    pub fn visible(&self, search_query: &str, category: Category) -> Vec<Product> {
        filter::visible_products(&self.products.read(), search_query, category)
    }

    /// Primary promo window under the given admin ordering
    pub fn promo(&self, promo_order: &[i64]) -> Vec<Product> {
        promo::promo_window(&self.products.read(), promo_order)
    }

    /// Secondary promo window under the given admin ordering
    pub fn secondary_promo(&self, promo_order: &[i64]) -> Vec<Product> {
        promo::secondary_window(&self.products.read(), promo_order)
    }
}
