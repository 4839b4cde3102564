//! Wire types for the weather service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /weather`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub message: String,
}

impl WeatherQuery {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful reply from `POST /weather`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReply {
    pub response: String,
}

impl WeatherReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

/// Result of one exchange with the service
pub type QueryOutcome = Result<WeatherReply, super::QueryError>;

/// Pull the `detail` field out of an error body.
///
/// Falsy details (missing, null, `""`, `false`, `0`) count as absent.
/// Other non-string details (validation error lists, for example) are kept as
/// compact JSON.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    match parsed.get("detail")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64().is_some_and(|v| v.abs() < f64::EPSILON) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
