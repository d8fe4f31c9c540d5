//! Session wiring.
//!
//! [`Storefront`] composes the catalog store, cart, asset library,
//! preference store, and admin panel behind one handle and owns the
//! debounced search pipeline. It holds everything a browsing session
//! holds: the working catalog, the cart, the active filter, and the
//! persisted preferences.

use crate::admin::AdminPanel;
use crate::assets::AssetLibrary;
use crate::cart::{Cart, CartLine, CheckoutPayload};
use crate::catalog::{CatalogSource, CatalogStore};
use crate::core::Config;
use crate::events;
use crate::prefs::{PrefStore, Prefs, PrefsResult, Theme};
use grit_client::StoreGateway;
use parking_lot::{Mutex, RwLock};
use shared::{Category, Product};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Active search/category selection
#[derive(Debug, Clone)]
struct FilterState {
    search_query: String,
    category: Category,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            category: Category::All,
        }
    }
}

/// One shopping session over the remote backend
pub struct Storefront {
    config: Config,
    catalog: Arc<CatalogStore>,
    assets: Arc<AssetLibrary>,
    admin: AdminPanel,
    prefs: Prefs,
    cart: Mutex<Cart>,
    filter: RwLock<FilterState>,
    shutdown: CancellationToken,
}

impl Storefront {
    pub fn new(
        config: Config,
        gateway: Arc<dyn StoreGateway>,
        store: Arc<dyn PrefStore>,
    ) -> Arc<Self> {
        let prefs = Prefs::new(store);
        let catalog = Arc::new(CatalogStore::new(
            gateway.clone(),
            Duration::from_millis(config.catalog_timeout_ms),
        ));
        let assets = Arc::new(AssetLibrary::new(gateway.clone()));
        let admin = AdminPanel::new(
            gateway,
            catalog.clone(),
            prefs.clone(),
            config.admin_password.clone(),
        );

        Arc::new(Self {
            config,
            catalog,
            assets,
            admin,
            prefs,
            cart: Mutex::new(Cart::new()),
            filter: RwLock::new(FilterState::default()),
            shutdown: CancellationToken::new(),
        })
    }

    /// Load the catalog (racing the timeout) and resolve the logo and
    /// video once so later reads hit the cached URLs
    pub async fn bootstrap(&self) -> CatalogSource {
        let source = self.catalog.bootstrap().await;
        self.assets.resolve_logo().await;
        self.assets.resolve_video().await;
        source
    }

    // ========== Search & Filtering ==========

    /// Wire the debounced search pipeline. Raw keystrokes go into the
    /// returned sender; the filter state changes only after the input
    /// settles for the configured delay.
    pub fn spawn_search_pipeline(self: &Arc<Self>) -> mpsc::UnboundedSender<String> {
        let delay = Duration::from_millis(self.config.search_debounce_ms);
        let (input, mut settled) = events::debounce::<String>(delay, self.shutdown.child_token());

        let session = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(query) = settled.recv().await {
                session.set_search_query(query);
            }
        });

        input
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.filter.write().search_query = query.into();
    }

    pub fn select_category(&self, category: Category) {
        self.filter.write().category = category;
    }

    pub fn search_query(&self) -> String {
        self.filter.read().search_query.clone()
    }

    pub fn category(&self) -> Category {
        self.filter.read().category
    }

    /// Product grid under the active search/category filter
    pub fn visible_products(&self) -> Vec<Product> {
        let filter = self.filter.read();
        self.catalog.visible(&filter.search_query, filter.category)
    }

    /// Featured window under the admin's stored ordering
    pub fn promo_products(&self) -> Vec<Product> {
        self.catalog.promo(&self.stored_promo_order())
    }

    /// Second featured section, continuing past the primary window
    pub fn secondary_promo_products(&self) -> Vec<Product> {
        self.catalog.secondary_promo(&self.stored_promo_order())
    }

    fn stored_promo_order(&self) -> Vec<i64> {
        match self.prefs.promo_order() {
            Ok(order) => order,
            Err(err) => {
                tracing::warn!("Promo order unreadable, using natural order: {err}");
                Vec::new()
            }
        }
    }

    // ========== Cart ==========

    pub fn add_to_cart(&self, product: &Product) {
        self.cart.lock().add(product);
    }

    pub fn add_to_cart_qty(&self, product: &Product, quantity: u32) {
        self.cart.lock().add_qty(product, quantity);
    }

    pub fn set_cart_quantity(&self, product_id: i64, quantity: u32) {
        self.cart.lock().set_quantity(product_id, quantity);
    }

    pub fn remove_from_cart(&self, product_id: i64) {
        self.cart.lock().remove(product_id);
    }

    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart.lock().lines().to_vec()
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.lock().count()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.lock().total()
    }

    /// Hand `(lines, total)` to the external checkout collaborator
    pub fn begin_checkout(&self) -> PrefsResult<CheckoutPayload> {
        self.cart.lock().begin_checkout(&self.prefs)
    }

    /// Checkout confirmed; the cart empties and the handoff record goes
    pub fn confirm_checkout(&self) -> PrefsResult<()> {
        self.cart.lock().confirm_checkout(&self.prefs)
    }

    // ========== Theme ==========

    pub fn theme(&self) -> Theme {
        self.prefs.theme().unwrap_or_default()
    }

    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme().toggled();
        if let Err(err) = self.prefs.set_theme(next) {
            tracing::warn!("Theme not persisted: {err}");
        }
        next
    }

    // ========== Accessors ==========

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<CatalogStore> {
        &self.catalog
    }

    pub fn assets(&self) -> &Arc<AssetLibrary> {
        &self.assets
    }

    pub fn admin(&self) -> &AdminPanel {
        &self.admin
    }

    pub fn prefs(&self) -> &Prefs {
        &self.prefs
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Stop the search pipeline and any other session workers
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}
