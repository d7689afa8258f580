//! The Context Snapshot Provider.
//!
//! Composes local time, day part, CPU load, battery charge, and the cached
//! weather line into a fresh `ContextSnapshot` per message. Side-effect-free
//! from the caller's view; the only internal state is the weather cache.

use crate::weather::WeatherCache;
use attune_core::snapshot::{ContextSnapshot, DayPart};
use attune_core::telemetry::SystemProbe;
use chrono::{DateTime, Local, Timelike};
use std::sync::Arc;

/// Produces point-in-time context snapshots.
pub struct ContextProvider {
    probe: Arc<dyn SystemProbe>,
    weather: WeatherCache,
}

impl ContextProvider {
    pub fn new(probe: Arc<dyn SystemProbe>, weather: WeatherCache) -> Self {
        Self { probe, weather }
    }

    /// Capture a fresh snapshot of the ambient environment.
    pub async fn snapshot(&self) -> ContextSnapshot {
        self.snapshot_at(Local::now()).await
    }

    async fn snapshot_at(&self, now: DateTime<Local>) -> ContextSnapshot {
        ContextSnapshot {
            timestamp_text: now.format("%A, %B %d, %Y %H:%M").to_string(),
            day_part: DayPart::from_hour(now.hour()),
            cpu_percent: self.probe.cpu_percent(),
            battery_percent: self.probe.battery_percent(),
            weather: self.weather.current().await,
        }
    }
}
