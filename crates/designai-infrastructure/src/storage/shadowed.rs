//! Durable store with an in-memory shadow.
//!
//! Every write lands in the shadow first and is then forwarded to the durable
//! backend when it reports itself available. Keys written during this process
//! are always read back from the shadow, so a backend that rejects writes
//! (quota, permissions, missing directory) cannot make the process observe
//! stale values. Only durability across restarts is lost.

use designai_core::error::Result;
use designai_core::store::KeyValueStore;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use super::memory::MemoryKeyValueStore;

pub struct ShadowedStore {
    durable: Arc<dyn KeyValueStore>,
    shadow: MemoryKeyValueStore,
    /// Keys written or removed by this process; the shadow is authoritative
    /// for them (absent in the shadow means removed).
    touched: Mutex<HashSet<String>>,
}

impl ShadowedStore {
    pub fn new(durable: Arc<dyn KeyValueStore>) -> Self {
        Self {
            durable,
            shadow: MemoryKeyValueStore::new(),
            touched: Mutex::new(HashSet::new()),
        }
    }

    /// Whether the durable backend currently accepts reads and writes.
    pub fn is_durable(&self) -> bool {
        self.durable.is_available()
    }

    fn touch(&self, key: &str) {
        self.touched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string());
    }

    fn is_touched(&self, key: &str) -> bool {
        self.touched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }

    /// Runs a write against the durable backend, downgrading failures to a
    /// warning.
    fn forward(&self, key: &str, op: &str, write: impl FnOnce(&dyn KeyValueStore) -> Result<()>) {
        if !self.durable.is_available() {
            tracing::warn!(key, op, "durable storage unavailable, keeping value in memory only");
            return;
        }
        if let Err(e) = write(self.durable.as_ref()) {
            tracing::warn!(key, op, error = %e, "durable write failed, keeping value in memory only");
        }
    }
}

impl KeyValueStore for ShadowedStore {
    fn is_available(&self) -> bool {
        true
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.is_touched(key) {
            return self.shadow.get(key);
        }

        if self.durable.is_available() {
            match self.durable.get(key) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::warn!(key, error = %e, "durable read failed, falling back to memory");
                }
            }
        }
        self.shadow.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.shadow.set(key, value)?;
        self.touch(key);
        self.forward(key, "set", |store| store.set(key, value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.shadow.remove(key)?;
        self.touch(key);
        self.forward(key, "remove", |store| store.remove(key));
        Ok(())
    }
}
