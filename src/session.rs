//! Session state for one chat client
//!
//! Holds the transcript and the input gate. The runtime is the only writer.

mod gate;
mod transcript;

pub use gate::InputGate;
pub use transcript::{Message, Role, Transcript};

/// The single mutable state of a running client
#[derive(Debug, Default)]
pub struct Session {
    transcript: Transcript,
    gate: InputGate,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn gate(&self) -> &InputGate {
        &self.gate
    }

    /// Current draft text
    pub fn draft(&self) -> &str {
        self.gate.draft()
    }

    /// True while an exchange is in flight
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    pub(crate) fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub(crate) fn gate_mut(&mut self) -> &mut InputGate {
        &mut self.gate
    }
}
