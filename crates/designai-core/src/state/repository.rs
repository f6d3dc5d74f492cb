//! Workspace repository trait.

use crate::record::GenerationRecord;
use crate::session::Session;

/// Access to the three persisted workspace documents.
///
/// Implementations never fail the caller: unreadable or malformed documents
/// load as absent, and writes that cannot reach durable storage are kept for
/// the rest of the process.
pub trait WorkspaceRepository: Send + Sync {
    fn load_session(&self) -> Option<Session>;

    /// Stores the session, or removes it when `None`.
    fn save_session(&self, session: Option<&Session>);

    /// Records, newest first. Empty when absent or unreadable.
    fn load_records(&self) -> Vec<GenerationRecord>;

    fn save_records(&self, records: &[GenerationRecord]);

    /// Credits left for `today` (`YYYY-MM-DD`).
    ///
    /// A missing document, one dated another day or one without a usable
    /// credit count is replaced by a full allowance, which is written back.
    fn load_credits(&self, today: &str) -> u32;

    fn save_credits(&self, credits: u32, today: &str);
}
