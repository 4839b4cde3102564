//! Effects produced by state transitions

use crate::session::Message;

/// Effects to be executed, in order, after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Empty the draft
    ClearDraft,

    /// Raise or drop the busy interlock
    SetBusy(bool),

    /// Add a message to the end of the transcript
    AppendMessage(Message),

    /// Send the query to the weather service
    SendQuery { text: String },
}

impl Effect {
    pub fn append_user(text: impl Into<String>) -> Self {
        Effect::AppendMessage(Message::user(text))
    }

    pub fn append_bot(text: impl Into<String>) -> Self {
        Effect::AppendMessage(Message::bot(text))
    }

    pub fn send_query(text: impl Into<String>) -> Self {
        Effect::SendQuery { text: text.into() }
    }
}
