use rand::Rng;

use crate::sensor::{BatterySensor, SensorError};

/// Randomized stand-in for machines without a readable battery.
///
/// Returns a uniform random level between 20 and 100 on every read, so
/// change-detection downstream has plenty to chew on.
pub struct SimulatedSensor;

impl SimulatedSensor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatterySensor for SimulatedSensor {
    fn read(&mut self) -> Result<u8, SensorError> {
        Ok(rand::thread_rng().gen_range(20..=100))
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
