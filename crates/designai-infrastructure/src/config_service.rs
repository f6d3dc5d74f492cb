//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `config.toml` (by default
//! `~/.config/designai/config.toml`). A missing file yields the defaults; a
//! file that exists but does not parse is an error.

use crate::paths::DesignPaths;
use designai_core::config::AppConfig;
use designai_core::error::{DesignError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Configuration service that loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration, filled on first successful load.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service reading from `path`. Nothing is read until the first
    /// call to [`ConfigService::get_config`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading the platform configuration file.
    pub fn with_default_path() -> Result<Self> {
        let path = DesignPaths::config_file()
            .map_err(|e| DesignError::config(format!("Failed to resolve config path: {}", e)))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load_from(&self.path)?;

        {
            let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = None;
    }

    /// Reads and parses a configuration file without caching.
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(AppConfig::default());
            }
            Err(e) => {
                return Err(DesignError::config(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        toml::from_str(&content).map_err(|e| {
            DesignError::config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }
}
