//! Chat session executor

use crate::client::{QueryError, QueryOutcome, WeatherClient};
use crate::session::Session;
use crate::state_machine::{transition, Effect, Event, ExchangeState};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Owns the session and coordinates at most one in-flight exchange
///
/// Settled queries come back over an internal channel so a UI can keep
/// handling input while the call is outstanding; see [`ChatRuntime::start_submit`]
/// and [`ChatRuntime::next_settlement`]. [`ChatRuntime::submit`] runs a whole
/// exchange in one call.
pub struct ChatRuntime<C>
where
    C: WeatherClient + 'static,
{
    state: ExchangeState,
    session: Session,
    client: Arc<C>,
    settled_tx: mpsc::Sender<Event>,
    settled_rx: mpsc::Receiver<Event>,
}

impl<C> ChatRuntime<C>
where
    C: WeatherClient + 'static,
{
    pub fn new(client: C) -> Self {
        Self::with_shared_client(Arc::new(client))
    }

    pub fn with_shared_client(client: Arc<C>) -> Self {
        // Only one exchange is ever in flight, so one slot is enough
        let (settled_tx, settled_rx) = mpsc::channel(1);
        Self {
            state: ExchangeState::Idle,
            session: Session::new(),
            client,
            settled_tx,
            settled_rx,
        }
    }

    /// Read access for the rendering layer
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &ExchangeState {
        &self.state
    }

    /// Replace the pending draft. Allowed at any time.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.session.gate_mut().set_draft(text);
    }

    /// Run one full exchange for the current draft.
    ///
    /// Does nothing if the gate does not admit the draft. Never fails: every
    /// outcome ends up as a bot message and the busy flag is always cleared.
    pub async fn submit(&mut self) {
        if self.start_submit() {
            self.await_settlement().await;
        }
    }

    /// Admit the current draft and send it without waiting for the reply.
    ///
    /// Returns `false` (and changes nothing) if the gate rejected it.
    pub fn start_submit(&mut self) -> bool {
        let draft = self.session.draft().to_string();
        self.process_event(Event::submit(draft))
    }

    /// Wait for the in-flight query to settle. Cancel-safe, for use in
    /// `tokio::select!`. Feed the returned event to [`ChatRuntime::apply`].
    pub async fn next_settlement(&mut self) -> Option<Event> {
        self.settled_rx.recv().await
    }

    /// Apply an event produced by [`ChatRuntime::next_settlement`]
    pub fn apply(&mut self, event: Event) -> bool {
        self.process_event(event)
    }

    /// Block until the current exchange, if any, has settled and been applied
    pub async fn await_settlement(&mut self) {
        while self.state.is_busy() {
            let event = match self.settled_rx.recv().await {
                Some(event) => event,
                // Unreachable while we hold the sender, but the exchange must still close
                None => Event::settled(Err(QueryError::transport("settlement channel closed"))),
            };
            self.process_event(event);
        }
    }

    fn process_event(&mut self, event: Event) -> bool {
        let result = match transition(&self.state, event) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(state = %self.state, reason = %e, "Event rejected");
                return false;
            }
        };

        tracing::debug!(from = %self.state, to = %result.new_state, "State transition");
        self.state = result.new_state;

        for effect in result.effects {
            self.execute_effect(effect);
        }

        true
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ClearDraft => self.session.gate_mut().clear_draft(),
            Effect::SetBusy(busy) => self.session.gate_mut().set_busy(busy),
            Effect::AppendMessage(message) => self.session.transcript_mut().append(message),
            Effect::SendQuery { text } => self.spawn_query(text),
        }
    }

    fn spawn_query(&self, text: String) {
        let client = self.client.clone();
        let settled_tx = self.settled_tx.clone();
        tokio::spawn(async move {
            let outcome = run_query(client, text).await;
            if settled_tx.send(Event::settled(outcome)).await.is_err() {
                tracing::debug!("Runtime dropped before query settled");
            }
        });
    }
}

/// Run the query in its own task so a panic inside the client still settles
/// the exchange, as a transport failure.
async fn run_query<C>(client: Arc<C>, text: String) -> QueryOutcome
where
    C: WeatherClient + 'static,
{
    let handle = tokio::spawn(async move { client.query(&text).await });
    match handle.await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "Weather query task failed");
            Err(QueryError::transport(format!("Query task failed: {e}")))
        }
    }
}
