//! Battery level sensors for voltlog.
//!
//! This crate provides the `BatterySensor` trait plus two implementations:
//! a live sensor backed by the system battery, and a randomized simulated
//! sensor for machines without one.
//!
//! # Example
//!
//! ```ignore
//! use voltlog_platform::{BatterySensor, LiveSensor};
//!
//! let mut sensor = LiveSensor::new()?;
//! println!("Charge: {}%", sensor.read()?);
//! ```

mod live;
mod sensor;
mod simulated;

pub use live::LiveSensor;
pub use sensor::{BatterySensor, SensorError};
pub use simulated::SimulatedSensor;
