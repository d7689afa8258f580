//! # Attune Context
//!
//! The Context Snapshot Provider: composes local time, day part, CPU load,
//! battery charge, and cached weather into a `ContextSnapshot`. All
//! telemetry failures are absorbed here with fixed fallbacks — callers of
//! `snapshot()` never see an error.

pub mod probe;
pub mod provider;
pub mod weather;
pub mod wttr;

pub use probe::SysinfoProbe;
pub use provider::ContextProvider;
pub use weather::{WeatherCache, WEATHER_UNAVAILABLE};
pub use wttr::WttrSource;
