//! Client-side preference persistence.
//!
//! A handful of per-installation values live outside the hosted backend:
//! the admin's manual promo ordering, the UI theme, the admin session
//! stamp and the checkout handoff payload. They are lost when the local
//! store is wiped and are never synchronized across installations.
//!
//! Storage is swappable through the [`PrefStore`] trait: [`RedbPrefStore`]
//! persists to disk, [`MemoryPrefStore`] backs tests.

pub mod memory;
pub mod redb_store;

pub use memory::MemoryPrefStore;
pub use redb_store::RedbPrefStore;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Admin's manual promo ordering (list of product ids)
pub const KEY_PROMO_ORDER: &str = "promo_order_v1";
/// UI theme preference
pub const KEY_THEME: &str = "theme";
/// Admin session stamp (login time, checked against the session lifetime)
pub const KEY_ADMIN_SESSION: &str = "admin_session";
/// Cart handoff written for the external checkout step
pub const KEY_CHECKOUT_PAYLOAD: &str = "checkout_payload";

/// Preference storage errors
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type PrefsResult<T> = Result<T, PrefsError>;

/// Raw key-value persistence for preference entries.
///
/// Values are opaque bytes at this level; [`Prefs`] layers JSON encoding
/// on top. Implementations must tolerate unknown keys (`get` returns
/// `None`, `remove` is a no-op).
pub trait PrefStore: Send + Sync {
    fn get(&self, key: &str) -> PrefsResult<Option<Vec<u8>>>;
    fn put(&self, key: &str, value: &[u8]) -> PrefsResult<()>;
    fn remove(&self, key: &str) -> PrefsResult<()>;
}

/// UI theme preference. Dark is the default for fresh installations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

/// Typed view over a [`PrefStore`].
///
/// Cheap to clone; all clones share the same underlying store.
#[derive(Clone)]
pub struct Prefs {
    store: Arc<dyn PrefStore>,
}

impl Prefs {
    pub fn new(store: Arc<dyn PrefStore>) -> Self {
        Self { store }
    }

    /// Read and decode a JSON-encoded preference. Missing key is `None`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> PrefsResult<Option<T>> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Encode and store a preference as JSON, replacing any previous value.
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> PrefsResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.store.put(key, &bytes)
    }

    pub fn remove(&self, key: &str) -> PrefsResult<()> {
        self.store.remove(key)
    }

    /// Stored promo ordering. Empty when the admin never reordered.
    pub fn promo_order(&self) -> PrefsResult<Vec<i64>> {
        Ok(self.get_json(KEY_PROMO_ORDER)?.unwrap_or_default())
    }

    pub fn set_promo_order(&self, ids: &[i64]) -> PrefsResult<()> {
        self.put_json(KEY_PROMO_ORDER, &ids)
    }

    pub fn theme(&self) -> PrefsResult<Theme> {
        Ok(self.get_json(KEY_THEME)?.unwrap_or_default())
    }

    pub fn set_theme(&self, theme: Theme) -> PrefsResult<()> {
        self.put_json(KEY_THEME, &theme)
    }
}
