//! GenerationRecord domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::state::Device;

/// Complexity class derived from the prompt's word count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// One generated design with its rendered preview.
///
/// Records are immutable once built; the list they live in is ordered newest
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRecord {
    /// `<unix-millis>-<6 hex digits>`
    pub id: String,
    pub prompt: String,
    pub template: String,
    pub tone: String,
    pub created_at: DateTime<Utc>,
    pub device: Device,
    pub complexity: Complexity,
    /// Self-contained preview document.
    pub html: String,
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub template: String,
    pub tone: String,
    pub device: Device,
}

impl GenerationRequest {
    pub fn new(
        prompt: impl Into<String>,
        template: impl Into<String>,
        tone: impl Into<String>,
        device: Device,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            template: template.into(),
            tone: tone.into(),
            device,
        }
    }
}
