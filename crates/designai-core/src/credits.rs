//! Daily credit quota.

use serde::{Deserialize, Serialize};

use crate::config::DAILY_CREDIT_LIMIT;
use crate::error::{DesignError, Result};

/// The persisted credit counter for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditsState {
    /// `YYYY-MM-DD`
    pub date: String,
    pub credits: u32,
}

impl CreditsState {
    /// Full allowance for `today`.
    pub fn fresh(today: impl Into<String>) -> Self {
        Self {
            date: today.into(),
            credits: DAILY_CREDIT_LIMIT,
        }
    }

    pub fn is_for(&self, today: &str) -> bool {
        self.date == today
    }

    /// The state that applies on `today`: unchanged on the same day, a fresh
    /// allowance on any other day.
    pub fn rolled_to(self, today: &str) -> Self {
        if self.is_for(today) {
            self
        } else {
            Self::fresh(today)
        }
    }
}

/// Takes one credit, failing without change when none are left.
pub fn spend_credit(credits: u32) -> Result<u32> {
    credits.checked_sub(1).ok_or(DesignError::QuotaExceeded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_has_full_limit() {
        let state = CreditsState::fresh("2026-10-18");
        assert_eq!(state.credits, 20);
        assert!(state.is_for("2026-10-18"));
    }

    #[test]
    fn test_roll_over_resets_other_days() {
        let stale = CreditsState {
            date: "2026-10-17".to_string(),
            credits: 3,
        };
        assert_eq!(stale.rolled_to("2026-10-18"), CreditsState::fresh("2026-10-18"));

        let current = CreditsState {
            date: "2026-10-18".to_string(),
            credits: 3,
        };
        assert_eq!(current.clone().rolled_to("2026-10-18"), current);
    }

    #[test]
    fn test_spend_credit() {
        assert_eq!(spend_credit(20).unwrap(), 19);
        assert_eq!(spend_credit(1).unwrap(), 0);
        assert!(spend_credit(0).unwrap_err().is_quota_exceeded());
    }
}
