//! Draft store - owns the single in-flight booking draft

use crate::models::{BookingDraft, DraftPatch};

/// Holds at most one in-progress draft per session.
///
/// The store never validates cross-field consistency; that is the
/// checkout wizard's job at transition time.
#[derive(Debug, Default)]
pub struct DraftStore {
    draft: Option<BookingDraft>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a patch into the current draft, creating one if absent
    pub fn set_fields(&mut self, patch: DraftPatch) {
        self.draft
            .get_or_insert_with(BookingDraft::new)
            .apply(patch);
    }

    /// Discard the draft unconditionally; idempotent
    pub fn clear(&mut self) {
        self.draft = None;
    }

    pub fn get(&self) -> Option<&BookingDraft> {
        self.draft.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut BookingDraft> {
        self.draft.as_mut()
    }
}
