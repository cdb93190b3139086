//! Sensor trait and error types.

/// Errors that can occur while reading the battery level.
///
/// All variants are transient: a failed read skips one sample and the
/// next read is attempted as usual.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("no battery found on this system")]
    NoBattery,

    #[error("battery backend error: {0}")]
    Backend(#[from] starship_battery::Error),
}

/// Source of battery charge readings.
///
/// A reading is an integer percentage in 0..=100. Implementations must
/// return promptly; callers poll once per tick.
pub trait BatterySensor {
    /// Read the current charge level as a whole percentage.
    fn read(&mut self) -> Result<u8, SensorError>;

    /// Short label identifying the sensor, for display and logs.
    fn name(&self) -> &'static str;
}
