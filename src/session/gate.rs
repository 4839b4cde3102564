//! Input admission control
//!
//! The gate is the only place that decides whether a submission may start an
//! exchange. It rejects blank drafts and anything submitted while busy.

/// Draft text plus the busy interlock
#[derive(Debug, Clone, Default)]
pub struct InputGate {
    draft: String,
    busy: bool,
}

impl InputGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Replace the pending draft
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// True iff the trimmed draft is non-empty and no exchange is in flight
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.draft.trim().is_empty()
    }

    /// The text that would be sent if the draft were submitted now
    pub fn outgoing_text(&self) -> &str {
        self.draft.trim()
    }

    pub(crate) fn clear_draft(&mut self) {
        self.draft.clear();
    }

    pub(crate) fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}
