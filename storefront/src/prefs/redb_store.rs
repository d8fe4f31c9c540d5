//! redb-backed preference store.
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `prefs` | `&str` | `&[u8]` | JSON-encoded preference values |
//!
//! redb commits with `Durability::Immediate`, so a preference written
//! before a crash survives it. The file lives under the configured data
//! directory and is the only local state the storefront keeps.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

use super::{PrefStore, PrefsResult};

const PREFS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("prefs");

/// Preference store backed by a single redb file
#[derive(Clone)]
pub struct RedbPrefStore {
    db: Arc<Database>,
}

impl RedbPrefStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> PrefsResult<Self> {
        let db = Database::create(path)?;

        // Create the table up front so reads never hit a missing table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> PrefsResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl PrefStore for RedbPrefStore {
    fn get(&self, key: &str) -> PrefsResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PREFS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn put(&self, key: &str, value: &[u8]) -> PrefsResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(PREFS_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> PrefsResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(PREFS_TABLE)?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }
}
