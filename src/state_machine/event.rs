//! Events that can occur during a session

use crate::client::QueryOutcome;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    /// The user asked to send the current draft
    Submit {
        /// Draft as typed, untrimmed
        draft: String,
    },

    /// The in-flight query finished, one way or another
    QuerySettled { outcome: QueryOutcome },
}

impl Event {
    pub fn submit(draft: impl Into<String>) -> Self {
        Event::Submit {
            draft: draft.into(),
        }
    }

    pub fn settled(outcome: QueryOutcome) -> Self {
        Event::QuerySettled { outcome }
    }
}
