//! OS telemetry probe backed by sysinfo and starship-battery.

use attune_core::telemetry::SystemProbe;
use std::sync::Mutex;
use sysinfo::System;
use tracing::debug;

/// System probe reading CPU load via a persistent `sysinfo::System` and
/// battery charge via the platform battery manager.
///
/// The `System` handle is kept alive between calls because CPU usage is
/// computed from the delta since the previous refresh; the first reading
/// after startup can be 0.
pub struct SysinfoProbe {
    system: Mutex<System>,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_usage();
        Self {
            system: Mutex::new(system),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbe for SysinfoProbe {
    fn cpu_percent(&self) -> f32 {
        let mut system = match self.system.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        system.refresh_cpu_usage();
        system.global_cpu_info().cpu_usage()
    }

    fn battery_percent(&self) -> Option<f32> {
        let manager = starship_battery::Manager::new().ok()?;
        let battery = manager.batteries().ok()?.next()?.ok()?;
        let pct = battery
            .state_of_charge()
            .get::<starship_battery::units::ratio::percent>();
        debug!(battery = pct, "Read battery charge");
        Some(pct)
    }
}
