//! Chat-style activity log.
//!
//! The log is rebuilt on every start and never persisted.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::clock::display_time;
use crate::config::CHAT_REPLAY_LIMIT;
use crate::record::GenerationRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

pub const WORKSPACE_READY: &str = "Workspace ready. Press Ctrl+Enter to generate.";
pub const NEW_PROJECT: &str = "New project created. Describe your next design brief.";
pub const LOGGED_OUT_HINT: &str =
    "You are logged out. Login again or continue directly to dashboard.";

/// Conversation shown at startup.
///
/// Replays the most recent records oldest first, each as the user's prompt
/// followed by a summary line.
pub fn replay_records(records: &[GenerationRecord]) -> Vec<ChatMessage> {
    if records.is_empty() {
        return vec![ChatMessage::assistant(WORKSPACE_READY)];
    }

    records
        .iter()
        .take(CHAT_REPLAY_LIMIT)
        .rev()
        .flat_map(|record| {
            [
                ChatMessage::user(record.prompt.clone()),
                ChatMessage::assistant(format!(
                    "Generated {} ({}) • Complexity: {} • {}",
                    record.template,
                    record.tone,
                    record.complexity,
                    display_time(record.created_at)
                )),
            ]
        })
        .collect()
}

/// Summary posted after a successful generation.
pub fn generation_summary(record: &GenerationRecord, remaining_credits: u32) -> String {
    format!(
        "Generated {} ({}) with {} complexity. Remaining credits: {}.",
        record.template, record.tone, record.complexity, remaining_credits
    )
}
