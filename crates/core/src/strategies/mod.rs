//! Control strategies — swappable policies that decide, from generic
//! action calls, whether a device should be on or off.
//!
//! A strategy receives the full parameter list of an unrecognized action;
//! by convention the first parameter is the policy command. Unknown
//! commands in the scheduled and temperature-based policies fall back to a
//! fresh manual policy so plain `ON`/`OFF` always works.

mod manual;
mod scheduled;
mod temperature_based;

pub use manual::ManualControl;
pub use scheduled::ScheduledControl;
pub use temperature_based::{TemperatureBasedControl, ThresholdMode};

use crate::device::Device;

/// A power-control policy held by exactly one device at a time.
pub trait ControlStrategy {
    /// Human-readable description including the current configuration.
    fn name(&self) -> String;

    /// Interpret a command. Malformed parameters are reported and leave
    /// both the strategy and the device untouched.
    fn control(&mut self, device: &mut dyn Device, params: &[String]);
}
