//! Error types for DesignAI.

use thiserror::Error;

use crate::state::View;

/// Input rejected by a validation rule.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Prompt is too short. Enter at least {min} characters with clear UI context.")]
    PromptTooShort { min: usize },

    #[error("Prompt contains blocked terms and was rejected.")]
    BlockedTerms,

    #[error("Name must contain at least 2 characters.")]
    InvalidName,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Password must contain at least 8 characters.")]
    InvalidPassword,

    #[error("Company must contain at least 2 characters.")]
    InvalidCompany,
}

/// A shared error type for the DesignAI crates.
///
/// The first group of variants is user-facing and never leaves state half
/// applied. The infrastructure variants describe storage or configuration
/// problems; persistence failures during normal operation are absorbed by the
/// storage layer and only show up here from explicit loading APIs.
#[derive(Error, Debug, Clone)]
pub enum DesignError {
    /// Prompt or login input rejected
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No credits left for today
    #[error("Daily credits exhausted. New credits reset tomorrow.")]
    QuotaExceeded,

    /// Operation needs an active session
    #[error("Please open login page and continue to dashboard first.")]
    AuthRequired,

    /// Export requested before any record exists
    #[error("Nothing to export yet. Generate a design first.")]
    NothingToExport,

    /// A simulated-latency operation is still in flight
    #[error("Another operation is still in progress.")]
    Busy,

    /// View change outside the allowed state machine edges
    #[error("Cannot switch view from {from} to {to}")]
    InvalidTransition { from: View, to: View },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML", "template"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DesignError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded)
    }

    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    /// Returns true for errors whose message is meant for the chat log
    /// rather than for diagnostics.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::QuotaExceeded
                | Self::AuthRequired
                | Self::NothingToExport
                | Self::Busy
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for DesignError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DesignError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DesignError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for DesignError {
    fn from(err: minijinja::Error) -> Self {
        Self::Serialization {
            format: "template".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DesignError>`.
pub type Result<T> = std::result::Result<T, DesignError>;
