//! HTTP weather service client

use super::types::{error_detail, WeatherQuery, WeatherReply};
use super::{QueryError, WeatherClient};
use crate::config::ClientConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Longest slice of a reply body carried into error messages and logs
const BODY_EXCERPT_CHARS: usize = 200;

/// `reqwest` implementation of [`WeatherClient`]
pub struct HttpWeatherClient {
    client: Client,
    query_url: String,
    health_url: String,
}

impl HttpWeatherClient {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            query_url: config.query_url(),
            health_url: config.health_url(),
        })
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    /// Check the service root. Returns the service's status message.
    pub async fn health(&self) -> Result<String, QueryError> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QueryError::connectivity(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(QueryError::remote(status.as_u16(), error_detail(&body)));
        }

        let message = serde_json::from_str::<HealthReply>(&body)
            .map(|h| h.message)
            .unwrap_or(body);
        Ok(message)
    }

    /// [`Self::health`] bounded by `limit`, independent of the configured
    /// request timeout. A check that runs out of time is a connectivity error.
    pub async fn health_within(&self, limit: Duration) -> Result<String, QueryError> {
        tokio::time::timeout(limit, self.health())
            .await
            .unwrap_or_else(|_| {
                Err(QueryError::connectivity(format!(
                    "Health check timed out after {}ms",
                    limit.as_millis()
                )))
            })
    }
}

#[async_trait]
impl WeatherClient for HttpWeatherClient {
    async fn query(&self, message: &str) -> Result<WeatherReply, QueryError> {
        let response = self
            .client
            .post(&self.query_url)
            .json(&WeatherQuery::new(message))
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QueryError::connectivity(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(QueryError::remote(status.as_u16(), error_detail(&body)));
        }

        serde_json::from_str(&body)
            .map_err(|e| QueryError::transport(format!("Failed to parse response: {e} - body: {}", excerpt(&body))))
    }
}

/// A builder error means nothing left the process. Everything else that
/// fails before a response arrives (refused, reset, timed out) is treated as
/// sent-but-unanswered.
fn classify_send_error(e: reqwest::Error) -> QueryError {
    if e.is_builder() {
        QueryError::transport(format!("Invalid request: {e}"))
    } else if e.is_timeout() {
        QueryError::connectivity(format!("Request timeout: {e}"))
    } else if e.is_connect() {
        QueryError::connectivity(format!("Connection failed: {e}"))
    } else {
        QueryError::connectivity(format!("Request failed: {e}"))
    }
}

fn excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let mut out: String = chars.by_ref().take(BODY_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}

#[derive(Debug, Deserialize)]
struct HealthReply {
    message: String,
}
