pub mod config_service;
pub mod dto;
pub mod paths;
pub mod storage;
pub mod workspace_storage;

pub use crate::config_service::ConfigService;
pub use crate::storage::{FileKeyValueStore, MemoryKeyValueStore, ShadowedStore};
pub use crate::workspace_storage::WorkspaceStorage;
