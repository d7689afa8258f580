//! Ambient context snapshot types.
//!
//! A `ContextSnapshot` is a point-in-time view of the machine and the
//! world outside it: local time, day part, CPU load, battery charge, and
//! the (cached) weather line. Snapshots are created fresh per message and
//! injected into the prompt as a single sentence.

use serde::{Deserialize, Serialize};

/// Coarse time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPart {
    /// Bucket an hour (0-23) into a day part.
    ///
    /// Boundaries are closed-open: [5,12) morning, [12,18) afternoon,
    /// [18,22) evening, everything else night. Hour 5 is morning, hour 22
    /// is night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => DayPart::Morning,
            12..=17 => DayPart::Afternoon,
            18..=21 => DayPart::Evening,
            _ => DayPart::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayPart::Morning => "morning",
            DayPart::Afternoon => "afternoon",
            DayPart::Evening => "evening",
            DayPart::Night => "night",
        }
    }
}

impl std::fmt::Display for DayPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point-in-time snapshot of ambient environment data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSnapshot {
    /// Formatted local date/time, e.g. "Wednesday, August 26, 2026 14:05"
    pub timestamp_text: String,

    /// Coarse time-of-day bucket
    pub day_part: DayPart,

    /// System-wide CPU load percentage
    pub cpu_percent: f32,

    /// Battery charge percentage; `None` when no battery sensor exists
    pub battery_percent: Option<f32>,

    /// Weather line, or the "weather unavailable" sentinel
    pub weather: String,
}

impl ContextSnapshot {
    /// Render the snapshot as the single context sentence embedded in the
    /// outgoing prompt.
    pub fn describe(&self) -> String {
        let battery = match self.battery_percent {
            Some(pct) => format!("{pct:.0}%"),
            None => "unknown".to_string(),
        };
        format!(
            "It's {} ({}). CPU {:.1}%, Battery {}, Weather: {}.",
            self.timestamp_text, self.day_part, self.cpu_percent, battery, self.weather
        )
    }
}
