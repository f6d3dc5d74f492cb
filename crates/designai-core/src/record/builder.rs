use chrono::{DateTime, Utc};
use rand::Rng;

use super::complexity::compute_complexity;
use super::model::{GenerationRecord, GenerationRequest};
use super::preview::{PreviewInput, render_preview};
use crate::error::Result;

/// Builds an immutable record stamped with `created_at`.
///
/// The prompt is stored as given; callers validate and trim it beforehand.
pub fn build_generation_record(
    request: GenerationRequest,
    created_at: DateTime<Utc>,
) -> Result<GenerationRecord> {
    let complexity = compute_complexity(&request.prompt);
    let html = render_preview(&PreviewInput {
        prompt: &request.prompt,
        template: &request.template,
        tone: &request.tone,
        complexity,
        created_at,
    })?;

    Ok(GenerationRecord {
        id: generate_record_id(created_at),
        prompt: request.prompt,
        template: request.template,
        tone: request.tone,
        created_at,
        device: request.device,
        complexity,
        html,
    })
}

/// Local identifier: creation time in milliseconds plus 24 random bits.
///
/// Unique with high probability; not suitable as a security token.
pub fn generate_record_id(created_at: DateTime<Utc>) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..0x100_0000);
    format!("{}-{:06x}", created_at.timestamp_millis(), suffix)
}
