//! Key-value store backends.
//!
//! - `FileKeyValueStore`: durable, one atomically replaced JSON file per key
//! - `MemoryKeyValueStore`: process-local map
//! - `ShadowedStore`: write-through composition of a durable backend and an
//!   in-memory shadow that keeps the process consistent when the backend fails

mod file_store;
mod memory;
mod shadowed;

pub use file_store::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use shadowed::ShadowedStore;
