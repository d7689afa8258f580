//! wttr.in weather source — fetches a one-line weather report.

use async_trait::async_trait;
use attune_core::error::TelemetryError;
use attune_core::telemetry::WeatherSource;
use std::time::Duration;
use tracing::debug;

/// HTTP weather source backed by <https://wttr.in> (or any endpoint that
/// returns a single plain-text line).
pub struct WttrSource {
    client: reqwest::Client,
    url: String,
}

impl WttrSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl Default for WttrSource {
    fn default() -> Self {
        Self::new("https://wttr.in?format=1")
    }
}

#[async_trait]
impl WeatherSource for WttrSource {
    async fn fetch(&self, timeout: Duration) -> Result<String, TelemetryError> {
        debug!(url = %self.url, "Fetching weather");

        let response = self
            .client
            .get(&self.url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TelemetryError::WeatherTimeout {
                        timeout_ms: timeout.as_millis() as u64,
                    }
                } else {
                    TelemetryError::WeatherFetch(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(TelemetryError::WeatherFetch(format!(
                "status {}",
                response.status().as_u16()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| TelemetryError::WeatherFetch(e.to_string()))?;

        Ok(text.trim().to_string())
    }
}
