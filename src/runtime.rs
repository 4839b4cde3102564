//! Runtime for driving a chat session
//!
//! The runtime is the request coordinator: it owns the session, runs the
//! state machine and executes its effects, including the one outbound call.

mod executor;

#[cfg(test)]
pub mod testing;

pub use executor::ChatRuntime;
