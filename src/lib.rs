//! Weather chat - terminal client for a conversational weather service
//!
//! The core is a small request-lifecycle state machine: a draft is admitted
//! by the input gate, sent to the weather service, and the reply (or a
//! classified failure) is appended to an append-only transcript.

pub mod classifier;
pub mod client;
pub mod config;
pub mod runtime;
pub mod session;
pub mod state_machine;
pub mod tui;
