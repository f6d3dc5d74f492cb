//! Credits document DTO

use serde::{Deserialize, Serialize};
use serde_json::Number;

use designai_core::credits::CreditsState;

/// On-disk credit counter: `{"date": "YYYY-MM-DD", "credits": n}`.
///
/// `credits` accepts any JSON number (negative or fractional values written by
/// other tools still parse); anything else fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditsDocument {
    pub date: String,
    pub credits: Number,
}

impl CreditsDocument {
    /// Converts to the domain model, flooring the counter and clamping it to
    /// `0..=u32::MAX`.
    pub fn into_domain(self) -> CreditsState {
        let credits = if let Some(n) = self.credits.as_u64() {
            u32::try_from(n).unwrap_or(u32::MAX)
        } else if self.credits.as_i64().is_some() {
            // Only negative integers reach this branch.
            0
        } else {
            let value = self.credits.as_f64().unwrap_or(0.0).floor();
            if value.is_finite() && value > 0.0 {
                value.min(f64::from(u32::MAX)) as u32
            } else {
                0
            }
        };

        CreditsState {
            date: self.date,
            credits,
        }
    }
}

impl From<&CreditsState> for CreditsDocument {
    fn from(state: &CreditsState) -> Self {
        Self {
            date: state.date.clone(),
            credits: Number::from(state.credits),
        }
    }
}
