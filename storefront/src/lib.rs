//! GritGear Storefront - direct-to-consumer e-commerce session engine
//!
//! # Overview
//!
//! The crate holds everything a shopping session holds, backed by a
//! hosted data service through the `grit-client` gateway:
//!
//! - **Catalog** (`catalog`): fetch-with-timeout bootstrap falling back
//!   to compiled-in sample data, search/category filtering, admin-ordered
//!   promo windows
//! - **Cart** (`cart`): quantity-keyed lines with decimal totals and
//!   the checkout handoff
//! - **Admin** (`admin`): password gate, single-flight edit sessions,
//!   product/hero/asset mutations
//! - **Assets** (`assets`): logo and video resolution, hero carousel
//! - **Preferences** (`prefs`): persisted key-value adapter (redb
//!   file, in-memory for tests)
//! - **HTTP** (`server`): static asset endpoints and the health probe
//!
//! # Module structure
//!
//! ```text
//! storefront/src/
//! ├── core/      # Configuration and session wiring
//! ├── catalog/   # Catalog store, sample data, filtering, promo
//! ├── cart/      # Cart aggregation and money helpers
//! ├── admin/     # Admin panel and edit sessions
//! ├── assets/    # Logo/video resolution, hero carousel
//! ├── prefs/     # Persisted preference adapter
//! ├── events/    # Debounce/throttle rate limiting
//! ├── server/    # Static asset endpoints
//! └── utils/     # Logging
//! ```

pub mod admin;
pub mod assets;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod events;
pub mod prefs;
pub mod server;
pub mod utils;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export the session surface
pub use crate::core::{Config, Storefront};
pub use admin::{AdminError, AdminPanel, EditPhase, EditSession, EditTarget};
pub use cart::{Cart, CartLine, CheckoutPayload};
pub use catalog::{CatalogSource, CatalogStore};
pub use prefs::{MemoryPrefStore, PrefStore, Prefs, RedbPrefStore, Theme};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from `LOG_LEVEL` / `LOG_DIR`
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ______     _ __
  / ____/____(_) /_
 / / __/ ___/ / __/
/ /_/ / /  / / /_
\____/_/  /_/\__/
   ______
  / ____/__  ____ ______
 / / __/ _ \/ __ `/ ___/
/ /_/ /  __/ /_/ / /
\____/\___/\__,_/_/
    "#
    );
}
