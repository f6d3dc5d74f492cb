//! Persistence of the workspace documents.
//!
//! Three independent JSON documents live under fixed keys: the session, the
//! record list and the daily credit counter. Reads are forgiving (anything
//! that does not parse into the expected shape counts as absent) and writes
//! never fail the caller thanks to the [`ShadowedStore`] underneath.

use designai_core::config::{DAILY_CREDIT_LIMIT, MAX_RECORDS, storage_keys};
use designai_core::credits::CreditsState;
use designai_core::error::{DesignError, Result};
use designai_core::record::GenerationRecord;
use designai_core::session::Session;
use designai_core::state::WorkspaceRepository;
use designai_core::store::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::Arc;

use crate::dto::CreditsDocument;
use crate::paths::DesignPaths;
use crate::storage::{FileKeyValueStore, MemoryKeyValueStore, ShadowedStore};

/// Typed access to the session, records and credits documents.
///
/// # Example
///
/// ```
/// use designai_core::state::WorkspaceRepository;
/// use designai_infrastructure::WorkspaceStorage;
///
/// let storage = WorkspaceStorage::in_memory();
/// assert_eq!(storage.load_credits("2026-10-18"), 20);
/// assert!(storage.load_session().is_none());
/// ```
pub struct WorkspaceStorage {
    store: ShadowedStore,
}

impl WorkspaceStorage {
    /// Wraps a durable backend with an in-memory shadow.
    pub fn new(durable: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store: ShadowedStore::new(durable),
        }
    }

    /// Storage that never outlives the process.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKeyValueStore::new()))
    }

    /// File-backed storage rooted at `dir`.
    pub fn at_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileKeyValueStore::new(dir)))
    }

    /// File-backed storage in the platform data directory.
    pub fn default_location() -> Result<Self> {
        let dir = DesignPaths::store_dir()
            .map_err(|e| DesignError::config(format!("Failed to resolve store directory: {}", e)))?;
        Ok(Self::at_dir(dir))
    }

    /// Whether writes currently survive a restart.
    pub fn is_durable(&self) -> bool {
        self.store.is_durable()
    }

    /// Reads and parses a document; anything unreadable is treated as absent.
    fn read_document<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read document");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring malformed document");
                None
            }
        }
    }

    fn write_document<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize document");
                return;
            }
        };
        if let Err(e) = self.store.set(key, &json) {
            tracing::warn!(key, error = %e, "failed to write document");
        }
    }
}

impl WorkspaceRepository for WorkspaceStorage {
    fn load_session(&self) -> Option<Session> {
        self.read_document(storage_keys::SESSION)
    }

    fn save_session(&self, session: Option<&Session>) {
        match session {
            Some(session) => self.write_document(storage_keys::SESSION, session),
            None => {
                if let Err(e) = self.store.remove(storage_keys::SESSION) {
                    tracing::warn!(error = %e, "failed to remove session document");
                }
            }
        }
    }

    fn load_records(&self) -> Vec<GenerationRecord> {
        let Some(entries) = self.read_document::<Vec<serde_json::Value>>(storage_keys::RECORDS)
        else {
            return Vec::new();
        };

        let total = entries.len();
        let mut records: Vec<GenerationRecord> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();

        if records.len() < total {
            tracing::warn!(
                dropped = total - records.len(),
                "ignoring malformed entries in record list"
            );
        }
        records.truncate(MAX_RECORDS);
        records
    }

    fn save_records(&self, records: &[GenerationRecord]) {
        self.write_document(storage_keys::RECORDS, records);
    }

    fn load_credits(&self, today: &str) -> u32 {
        let stored = self
            .read_document::<CreditsDocument>(storage_keys::CREDITS)
            .map(CreditsDocument::into_domain);

        match stored {
            Some(state) if state.is_for(today) => state.credits,
            _ => {
                tracing::info!(today, "resetting daily credits");
                self.save_credits(DAILY_CREDIT_LIMIT, today);
                DAILY_CREDIT_LIMIT
            }
        }
    }

    fn save_credits(&self, credits: u32, today: &str) {
        let state = CreditsState {
            date: today.to_string(),
            credits,
        };
        self.write_document(storage_keys::CREDITS, &CreditsDocument::from(&state));
    }
}
