//! Turns a settled weather query into the text shown to the user

use crate::client::{QueryError, QueryOutcome};

/// Shown when the request went out but nothing came back
pub const CONNECTIVITY_FAILURE: &str =
    "Cannot connect to server. Please check if the backend is running.";

/// Shown for every failure that is neither a remote nor a connectivity error
pub const GENERIC_FAILURE: &str =
    "Sorry, there was an error processing your request. Please try again.";

const UNKNOWN_DETAIL: &str = "Unknown error";

/// Map an outcome to exactly one display string
pub fn classify(outcome: &QueryOutcome) -> String {
    match outcome {
        Ok(reply) => reply.response.clone(),
        Err(QueryError::Remote { status, detail }) => format!(
            "Server error: {status} - {}",
            detail.as_deref().unwrap_or(UNKNOWN_DETAIL)
        ),
        Err(QueryError::Connectivity { .. }) => CONNECTIVITY_FAILURE.to_string(),
        Err(QueryError::Transport { .. }) => GENERIC_FAILURE.to_string(),
    }
}
