//! Unified path management for DesignAI files.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

const APP_DIR: &str = "designai";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for DesignAI.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/designai/              # Config directory
/// └── config.toml                  # Application configuration
///
/// ~/.local/share/designai/         # Data directory
/// └── store/                       # Durable key-value documents
///     ├── designai.session.json
///     ├── designai.records.json
///     └── designai.credits.json
/// ```
pub struct DesignPaths;

impl DesignPaths {
    /// Returns the DesignAI configuration directory (e.g. `~/.config/designai/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the DesignAI data directory (e.g. `~/.local/share/designai/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default directory of the durable key-value store.
    pub fn store_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_namespaced() {
        if let Ok(file) = DesignPaths::config_file() {
            assert!(file.ends_with("designai/config.toml"));
        }
        if let Ok(store) = DesignPaths::store_dir() {
            assert!(store.ends_with("designai/store"));
        }
    }
}
