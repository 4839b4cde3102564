//! Exchange state types

use std::fmt;

/// Where the session is in its request lifecycle
///
/// `Success` and `Failed` are not stored: settling a query always lands back
/// in `Idle`, so they only exist as the outcome carried by the settle event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExchangeState {
    /// No exchange in flight; submissions are admitted
    #[default]
    Idle,
    /// One query is in flight
    Sending {
        /// Trimmed text that was sent
        query: String,
    },
}

impl ExchangeState {
    pub fn is_busy(&self) -> bool {
        matches!(self, ExchangeState::Sending { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExchangeState::Idle => "idle",
            ExchangeState::Sending { .. } => "sending",
        }
    }
}

impl fmt::Display for ExchangeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
