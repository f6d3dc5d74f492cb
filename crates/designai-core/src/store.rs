//! Key-value storage abstraction.
//!
//! The persisted workspace documents are plain JSON strings under fixed keys.
//! Backends advertise whether they can currently be used through
//! [`KeyValueStore::is_available`]; callers check the capability instead of
//! treating failures as control flow.

use crate::error::Result;

/// A string-keyed store of string values.
pub trait KeyValueStore: Send + Sync {
    /// Whether the backend can currently be read and written.
    fn is_available(&self) -> bool;

    /// Returns the stored value, `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the key. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}
