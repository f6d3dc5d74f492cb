//! Generation record domain module.
//!
//! # Module Structure
//!
//! - `model`: `GenerationRecord`, `GenerationRequest`, `Complexity`
//! - `complexity`: word-count complexity scoring
//! - `preview`: HTML preview rendering
//! - `builder`: record assembly (id, timestamp, complexity, preview)

mod builder;
mod complexity;
mod model;
mod preview;

// Re-export public API
pub use builder::{build_generation_record, generate_record_id};
pub use complexity::compute_complexity;
pub use model::{Complexity, GenerationRecord, GenerationRequest};
pub use preview::{PreviewInput, empty_preview_html, render_preview};
