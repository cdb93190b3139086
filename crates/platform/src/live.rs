use starship_battery::units::ratio::percent;
use starship_battery::Manager;
use tracing::trace;

use crate::sensor::{BatterySensor, SensorError};

/// Sensor backed by the first system battery.
pub struct LiveSensor {
    manager: Manager,
}

impl LiveSensor {
    pub fn new() -> Result<Self, SensorError> {
        let manager = Manager::new()?;
        let mut sensor = Self { manager };
        // Fail construction early if no battery is present.
        sensor.read()?;
        Ok(sensor)
    }

    /// Check if a battery is available on this system.
    pub fn is_available() -> bool {
        Manager::new()
            .ok()
            .and_then(|m| m.batteries().ok())
            .and_then(|mut b| b.next())
            .and_then(|b| b.ok())
            .is_some()
    }
}

impl BatterySensor for LiveSensor {
    fn read(&mut self) -> Result<u8, SensorError> {
        let battery = self
            .manager
            .batteries()?
            .next()
            .ok_or(SensorError::NoBattery)??;

        let charge = battery.state_of_charge().get::<percent>();
        let level = charge.round().clamp(0.0, 100.0) as u8;
        trace!(charge, level, "Read live battery level");
        Ok(level)
    }

    fn name(&self) -> &'static str {
        "battery"
    }
}
