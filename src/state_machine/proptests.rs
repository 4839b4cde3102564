//! Property-based tests for the state machine
//!
//! These tests drive the pure transition function with a minimal effect
//! interpreter and check the session invariants after every step.

use super::*;
use crate::classifier::classify;
use crate::client::{QueryError, QueryOutcome, WeatherReply};
use crate::session::{Role, Session};
use proptest::prelude::*;

// ============================================================================
// Test Harness
// ============================================================================

/// Applies effects the way the runtime does, but records queries instead of sending them
#[derive(Default)]
struct Harness {
    state: ExchangeState,
    session: Session,
    sent: Vec<String>,
}

impl Harness {
    fn handle(&mut self, event: Event) -> bool {
        let Ok(result) = transition(&self.state, event) else {
            return false;
        };
        self.state = result.new_state;
        for effect in result.effects {
            match effect {
                Effect::ClearDraft => self.session.gate_mut().clear_draft(),
                Effect::SetBusy(busy) => self.session.gate_mut().set_busy(busy),
                Effect::AppendMessage(m) => self.session.transcript_mut().append(m),
                Effect::SendQuery { text } => self.sent.push(text),
            }
        }
        true
    }

    fn submit(&mut self) -> bool {
        let draft = self.session.draft().to_string();
        self.handle(Event::submit(draft))
    }

    fn snapshot(&self) -> (usize, String, bool) {
        (
            self.session.transcript().len(),
            self.session.draft().to_string(),
            self.session.is_busy(),
        )
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

#[derive(Debug, Clone)]
enum Action {
    SetDraft(String),
    Submit,
    Settle(QueryOutcome),
}

fn arb_draft() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ?]{1,30}",
        Just(String::new()),
        "[ \t\n]{1,5}",
    ]
}

fn arb_outcome() -> impl Strategy<Value = QueryOutcome> {
    prop_oneof![
        "[a-zA-Z0-9 .,]{0,40}".prop_map(|r| Ok(WeatherReply::new(r))),
        (400u16..600, proptest::option::of("[a-z ]{0,20}"))
            .prop_map(|(status, detail)| Err(QueryError::remote(status, detail))),
        "[a-z ]{0,20}".prop_map(|m| Err(QueryError::connectivity(m))),
        "[a-z ]{0,20}".prop_map(|m| Err(QueryError::transport(m))),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        arb_draft().prop_map(Action::SetDraft),
        Just(Action::Submit),
        arb_outcome().prop_map(Action::Settle),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_busy_flag_tracks_state(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut h = Harness::default();
        for action in actions {
            match action {
                Action::SetDraft(d) => h.session.gate_mut().set_draft(d),
                Action::Submit => { h.submit(); }
                Action::Settle(o) => { h.handle(Event::settled(o)); }
            }
            prop_assert_eq!(h.session.is_busy(), h.state.is_busy());
        }
    }

    #[test]
    fn prop_rejected_events_change_nothing(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut h = Harness::default();
        for action in actions {
            let before = h.snapshot();
            let accepted = match action {
                Action::SetDraft(d) => { h.session.gate_mut().set_draft(d); continue; }
                Action::Submit => {
                    let admissible = h.session.gate().can_submit();
                    let accepted = h.submit();
                    prop_assert_eq!(accepted, admissible);
                    accepted
                }
                Action::Settle(o) => h.handle(Event::settled(o)),
            };
            if !accepted {
                prop_assert_eq!(h.snapshot(), before);
            }
        }
    }

    #[test]
    fn prop_transcript_alternates(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut h = Harness::default();
        for action in actions {
            match action {
                Action::SetDraft(d) => h.session.gate_mut().set_draft(d),
                Action::Submit => { h.submit(); }
                Action::Settle(o) => { h.handle(Event::settled(o)); }
            }
        }

        for (i, message) in h.session.transcript().all().iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Bot };
            prop_assert_eq!(message.role(), expected);
        }
        // An open exchange leaves exactly one unanswered user message
        let open = usize::from(h.state.is_busy());
        prop_assert_eq!(h.session.transcript().len() % 2, open);
        prop_assert_eq!(h.sent.len(), h.session.transcript().len().div_ceil(2));
    }

    #[test]
    fn prop_serial_exchanges_yield_two_n(
        exchanges in proptest::collection::vec(("[a-zA-Z?]{1,20}", arb_outcome()), 1..20)
    ) {
        let mut h = Harness::default();
        for (query, outcome) in &exchanges {
            h.session.gate_mut().set_draft(query.clone());
            prop_assert!(h.submit());
            prop_assert!(h.handle(Event::settled(outcome.clone())));
            prop_assert!(!h.session.is_busy());
        }

        let messages = h.session.transcript().all();
        prop_assert_eq!(messages.len(), exchanges.len() * 2);
        for (pair, (query, outcome)) in messages.chunks(2).zip(&exchanges) {
            prop_assert_eq!(pair[0].role(), Role::User);
            prop_assert_eq!(pair[0].content(), query.as_str());
            prop_assert_eq!(pair[1].role(), Role::Bot);
            prop_assert_eq!(pair[1].content(), classify(outcome));
        }
    }

    #[test]
    fn prop_remote_errors_render_status(status in 100u16..600, detail in proptest::option::of("[a-z ]{1,20}")) {
        let text = classify(&Err(QueryError::remote(status, detail.clone())));
        let expected_detail = detail.unwrap_or_else(|| "Unknown error".to_string());
        prop_assert_eq!(text, format!("Server error: {status} - {expected_detail}"));
    }
}
