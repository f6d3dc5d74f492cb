//! Domain layer for DesignAI.
//!
//! Holds the session, record and credit models together with the pure rules
//! that govern them (validation, login resolution, complexity scoring, preview
//! rendering). Persistence and orchestration live in the infrastructure and
//! application crates and reach this crate through the traits in
//! [`store`], [`clock`] and [`state::repository`].

pub mod chat;
pub mod clock;
pub mod config;
pub mod credits;
pub mod error;
pub mod record;
pub mod session;
pub mod state;
pub mod store;
pub mod validation;

// Re-export common error types
pub use error::{DesignError, Result, ValidationError};
