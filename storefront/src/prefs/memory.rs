//! In-memory preference store, used by tests and throwaway sessions.

use parking_lot::RwLock;
use std::collections::HashMap;

use super::{PrefStore, PrefsResult};

#[derive(Default)]
pub struct MemoryPrefStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> PrefsResult<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> PrefsResult<()> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> PrefsResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
