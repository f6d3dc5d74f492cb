//! Persisted document DTOs.
//!
//! Session and record documents are stored in their domain shape. The credit
//! counter goes through a DTO so that foreign or hand-edited values can be
//! recognised and reset instead of failing to load.

mod credits;

pub use credits::CreditsDocument;
