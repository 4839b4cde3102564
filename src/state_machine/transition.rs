//! Pure state transition function

use super::{Effect, Event, ExchangeState};
use crate::classifier::classify;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ExchangeState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ExchangeState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Reasons an event is rejected. A rejected event leaves the session untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("An exchange is already in flight")]
    Busy,
    #[error("Nothing to send")]
    EmptyDraft,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// Given the same state and event it always produces the same result, with
/// no I/O. Effects are listed in the order the runtime must apply them.
pub fn transition(
    state: &ExchangeState,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        (ExchangeState::Sending { .. }, Event::Submit { .. }) => Err(TransitionError::Busy),

        (ExchangeState::Idle, Event::Submit { draft }) => {
            let text = draft.trim();
            if text.is_empty() {
                return Err(TransitionError::EmptyDraft);
            }

            Ok(TransitionResult::new(ExchangeState::Sending {
                query: text.to_string(),
            })
            .with_effect(Effect::ClearDraft)
            .with_effect(Effect::SetBusy(true))
            .with_effect(Effect::append_user(text))
            .with_effect(Effect::send_query(text)))
        }

        // Success and failure both land in Idle; the busy flag always drops
        (ExchangeState::Sending { .. }, Event::QuerySettled { outcome }) => {
            Ok(TransitionResult::new(ExchangeState::Idle)
                .with_effect(Effect::append_bot(classify(&outcome)))
                .with_effect(Effect::SetBusy(false)))
        }

        (ExchangeState::Idle, Event::QuerySettled { .. }) => Err(
            TransitionError::InvalidTransition("query settled with no exchange in flight".into()),
        ),
    }
}
