//! Telemetry traits — OS probes and the weather source.
//!
//! Both are fallible in ways the engine never sees: the context provider
//! absorbs every telemetry failure with a fixed fallback (missing battery
//! reads as unknown, failed weather fetches become a sentinel line).

use crate::error::TelemetryError;
use async_trait::async_trait;
use std::time::Duration;

/// OS telemetry collaborator (CPU load, battery charge).
pub trait SystemProbe: Send + Sync {
    /// System-wide CPU load percentage.
    fn cpu_percent(&self) -> f32;

    /// Battery charge percentage, or `None` when no battery sensor exists.
    /// A missing sensor is not an error.
    fn battery_percent(&self) -> Option<f32>;
}

/// External weather data source.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the current weather as a single line of text.
    async fn fetch(&self, timeout: Duration) -> Result<String, TelemetryError>;
}
