//! Weather service client abstraction
//!
//! The runtime only sees [`WeatherClient`]; the HTTP implementation and the
//! test mocks sit behind it.

mod error;
mod http;
mod types;

pub use error::QueryError;
pub use http::HttpWeatherClient;
pub use types::{QueryOutcome, WeatherQuery, WeatherReply};

use async_trait::async_trait;
use std::sync::Arc;

/// Sends one free-text query to the weather service
#[async_trait]
pub trait WeatherClient: Send + Sync {
    async fn query(&self, message: &str) -> Result<WeatherReply, QueryError>;
}

#[async_trait]
impl<T: WeatherClient + ?Sized> WeatherClient for Arc<T> {
    async fn query(&self, message: &str) -> Result<WeatherReply, QueryError> {
        (**self).query(message).await
    }
}

/// Logging wrapper for weather clients
pub struct LoggingClient<C> {
    inner: C,
}

impl<C: WeatherClient> LoggingClient<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: WeatherClient> WeatherClient for LoggingClient<C> {
    async fn query(&self, message: &str) -> Result<WeatherReply, QueryError> {
        let start = std::time::Instant::now();
        let result = self.inner.query(message).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    duration_ms = %duration.as_millis(),
                    query_len = message.len(),
                    reply_len = reply.response.len(),
                    "Weather query completed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    duration_ms = %duration.as_millis(),
                    kind = e.kind(),
                    error = %e,
                    "Weather query failed"
                );
            }
        }

        result
    }
}
