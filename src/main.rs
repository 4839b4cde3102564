//! Weather chat - terminal client for a conversational weather service

use std::fs::OpenOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_chat::client::{HttpWeatherClient, LoggingClient};
use weather_chat::config::ClientConfig;
use weather_chat::runtime::ChatRuntime;

/// The health check only logs, so it must never hold up the UI for long
const HEALTH_CHECK_LIMIT: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env();

    // Log to a file: the terminal UI owns stdout
    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_chat=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(Arc::new(log_file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = ?config.timeout.map(|t| t.as_secs()),
        "Starting weather chat"
    );

    let http = HttpWeatherClient::new(&config)?;
    match http.health_within(HEALTH_CHECK_LIMIT).await {
        Ok(status) => tracing::info!(status = %status, "Weather service reachable"),
        Err(e) => tracing::warn!(error = %e, kind = e.kind(), "Weather service health check failed"),
    }

    let mut runtime = ChatRuntime::new(LoggingClient::new(http));
    weather_chat::tui::run(&mut runtime).await?;

    tracing::info!(
        messages = runtime.session().transcript().len(),
        "Weather chat finished"
    );
    Ok(())
}
