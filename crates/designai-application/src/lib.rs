//! Application layer for DesignAI.
//!
//! Owns the in-memory [`AppState`](designai_core::state::AppState) and
//! coordinates the domain rules with the persisted workspace documents.

pub mod controller;
pub mod export;

pub use controller::{PendingGeneration, PendingLogin, WorkspaceController};
pub use export::{ExportArtifact, ExportFormat, export_record};
