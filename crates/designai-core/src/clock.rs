//! Time source abstraction.
//!
//! Day keys and record timestamps are taken from a [`Clock`] so the daily
//! credit reset can be exercised without waiting for midnight.

use chrono::{DateTime, Local, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar day key (`YYYY-MM-DD`, UTC) of [`Clock::now`].
    fn today_key(&self) -> String {
        day_key(self.now())
    }
}

/// Formats the UTC calendar day of `at` as `YYYY-MM-DD`.
pub fn day_key(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Human-readable local timestamp, e.g. `18.10.2026, 14:05`.
pub fn display_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d.%m.%Y, %H:%M").to_string()
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
