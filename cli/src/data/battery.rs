use tracing::{debug, warn};
use voltlog_platform::{BatterySensor, LiveSensor, SensorError, SimulatedSensor};

/// Current battery level, fed by whichever sensor is active.
///
/// Picks the live system battery when one is present, otherwise falls back
/// to the simulated sensor so the app stays usable on desktop machines.
pub struct BatteryData {
    sensor: Box<dyn BatterySensor>,
    current: Option<u8>,
}

impl BatteryData {
    pub fn new(simulate: bool) -> Self {
        let sensor: Box<dyn BatterySensor> = if simulate {
            debug!("Using simulated battery sensor (requested)");
            Box::new(SimulatedSensor::new())
        } else if LiveSensor::is_available() {
            match LiveSensor::new() {
                Ok(live) => Box::new(live),
                Err(e) => {
                    warn!(error = %e, "Battery backend failed, falling back to simulated sensor");
                    Box::new(SimulatedSensor::new())
                }
            }
        } else {
            warn!("No battery found on this system, falling back to simulated sensor");
            Box::new(SimulatedSensor::new())
        };

        Self {
            sensor,
            current: None,
        }
    }

    pub fn with_sensor(sensor: Box<dyn BatterySensor>) -> Self {
        Self {
            sensor,
            current: None,
        }
    }

    /// Poll the sensor once and remember the reading for display.
    ///
    /// On failure the previously displayed level is kept as-is.
    pub fn refresh(&mut self) -> Result<u8, SensorError> {
        let level = self.sensor.read()?;
        self.current = Some(level);
        Ok(level)
    }

    /// Most recent successful reading, if any.
    pub fn current_percent(&self) -> Option<u8> {
        self.current
    }

    pub fn sensor_name(&self) -> &'static str {
        self.sensor.name()
    }
}
