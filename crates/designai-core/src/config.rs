//! Product constants and user-facing configuration types.
//!
//! The constants describe fixed product rules (quota, capacity, blocklist)
//! and are deliberately not part of [`AppConfig`]. `AppConfig` only carries
//! operational settings loaded from `config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Credits granted at the start of each calendar day.
pub const DAILY_CREDIT_LIMIT: u32 = 20;

/// Maximum number of records kept, newest first.
pub const MAX_RECORDS: usize = 50;

/// Terms that reject a prompt when contained anywhere in it (case-insensitive).
pub const BLOCKED_TERMS: [&str; 4] = ["malware", "phishing", "exploit", "keylogger"];

/// Minimum prompt length in characters after trimming.
pub const MIN_PROMPT_CHARS: usize = 20;

/// Simulated latency before a login completes.
pub const LOGIN_DELAY: Duration = Duration::from_millis(550);

/// Simulated latency before a generation completes.
pub const GENERATION_DELAY: Duration = Duration::from_millis(900);

/// Number of stored records replayed into the chat log on startup.
pub const CHAT_REPLAY_LIMIT: usize = 6;

pub const FALLBACK_NAME: &str = "Guest User";
pub const FALLBACK_EMAIL: &str = "guest@local.invalid";
pub const FALLBACK_COMPANY: &str = "Independent";

/// Keys of the three persisted documents.
pub mod storage_keys {
    pub const SESSION: &str = "designai.session";
    pub const RECORDS: &str = "designai.records";
    pub const CREDITS: &str = "designai.credits";
}

/// Which login rule set governs `login`.
///
/// `Lenient` resolves every input into a session and reports fallbacks as
/// notices. `Strict` rejects input that fails field validation before any
/// state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginPolicy {
    #[default]
    Lenient,
    Strict,
}

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageSettings,
    pub auth: AuthSettings,
    pub debug: DebugSettings,
    pub simulation: SimulationSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory of the durable key-value files. `None` uses the platform
    /// data directory.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub login_policy: LoginPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    /// Default tracing filter, overridden by `RUST_LOG` and `--log-level`.
    pub log_level: String,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Wait for [`LOGIN_DELAY`] / [`GENERATION_DELAY`] before committing.
    pub enabled: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
