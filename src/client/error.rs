//! Weather query error types

use thiserror::Error;

/// Failure of one outbound weather query, classified once at the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The service answered with a non-success status
    #[error("remote error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Remote { status: u16, detail: Option<String> },
    /// The request went out but no response came back
    #[error("no response from weather service: {message}")]
    Connectivity { message: String },
    /// The request could not be sent, or the reply could not be understood
    #[error("weather request failed: {message}")]
    Transport { message: String },
}

impl QueryError {
    pub fn remote(status: u16, detail: Option<String>) -> Self {
        Self::Remote { status, detail }
    }

    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::Connectivity {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Short label used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Remote { .. } => "remote",
            Self::Connectivity { .. } => "connectivity",
            Self::Transport { .. } => "transport",
        }
    }
}
