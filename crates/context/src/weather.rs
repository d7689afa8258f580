//! Process-wide weather cache.
//!
//! Owns `{last_value, last_fetch}` explicitly behind a mutex rather than
//! relying on ambient globals. Refreshes at most once per TTL window; a
//! failed fetch stores the sentinel AND advances `last_fetch`, so a failing
//! endpoint is not retried until the next full window.

use attune_core::telemetry::WeatherSource;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Fixed fallback value when the weather source fails.
pub const WEATHER_UNAVAILABLE: &str = "weather unavailable";

struct CacheState {
    last_value: Option<String>,
    last_fetch: Option<Instant>,
}

/// TTL-gated cache in front of a `WeatherSource`.
pub struct WeatherCache {
    source: Arc<dyn WeatherSource>,
    ttl: Duration,
    fetch_timeout: Duration,
    state: Mutex<CacheState>,
}

impl WeatherCache {
    pub fn new(source: Arc<dyn WeatherSource>, ttl: Duration, fetch_timeout: Duration) -> Self {
        Self {
            source,
            ttl,
            fetch_timeout,
            state: Mutex::new(CacheState {
                last_value: None,
                last_fetch: None,
            }),
        }
    }

    /// The current weather line, refreshing if the cache window has lapsed.
    pub async fn current(&self) -> String {
        self.current_at(Instant::now()).await
    }

    /// Refresh logic with an injectable clock reading.
    async fn current_at(&self, now: Instant) -> String {
        let mut state = self.state.lock().await;

        let stale = match state.last_fetch {
            Some(at) => now.duration_since(at) > self.ttl,
            None => true,
        };

        if stale {
            let value = match self.source.fetch(self.fetch_timeout).await {
                Ok(text) => {
                    let text = text.trim().to_string();
                    debug!(weather = %text, "Refreshed weather cache");
                    text
                }
                Err(e) => {
                    warn!("Weather fetch failed, caching sentinel: {e}");
                    WEATHER_UNAVAILABLE.to_string()
                }
            };
            state.last_value = Some(value);
            // Advanced on failure too: cools down a failing endpoint for a
            // full window instead of hammering it.
            state.last_fetch = Some(now);
        }

        state
            .last_value
            .clone()
            .unwrap_or_else(|| WEATHER_UNAVAILABLE.to_string())
    }
}
