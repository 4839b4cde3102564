//! Mock weather clients for testing
//!
//! These mocks enable runtime tests without a live service.

use crate::client::{QueryError, WeatherClient, WeatherReply};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock client that returns queued outcomes in order
pub struct MockWeatherClient {
    outcomes: Mutex<VecDeque<Result<WeatherReply, QueryError>>>,
    /// Every query text received, in order
    pub queries: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockWeatherClient {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, response: impl Into<String>) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(WeatherReply::new(response)));
    }

    /// Queue a failure
    pub fn queue_error(&self, error: QueryError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Default for MockWeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherClient for MockWeatherClient {
    async fn query(&self, message: &str) -> Result<WeatherReply, QueryError> {
        self.queries.lock().unwrap().push(message.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(QueryError::connectivity("No mock outcome queued")))
    }
}

/// Client whose query task panics
pub struct PanickingClient;

#[async_trait]
impl WeatherClient for PanickingClient {
    async fn query(&self, _message: &str) -> Result<WeatherReply, QueryError> {
        panic!("weather client exploded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_replays_queue() {
        let mock = MockWeatherClient::new();
        mock.queue_reply("Sunny");
        mock.queue_error(QueryError::remote(503, None));

        assert_eq!(mock.query("a").await.unwrap().response, "Sunny");
        assert_eq!(mock.query("b").await.unwrap_err(), QueryError::remote(503, None));

        // Queue exhausted
        let result = mock.query("c").await;
        assert!(matches!(result, Err(QueryError::Connectivity { .. })));
        assert_eq!(mock.recorded_queries(), vec!["a", "b", "c"]);
    }
}
