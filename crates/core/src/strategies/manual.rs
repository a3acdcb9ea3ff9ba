//! Manual control — direct `ON`/`OFF` commands.

use crate::device::Device;
use crate::strategies::ControlStrategy;

/// Maps the first parameter to a power transition. Anything other than
/// `ON` or `OFF` is reported as unrecognized and ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualControl;

impl ControlStrategy for ManualControl {
    fn name(&self) -> String {
        "Manual Control".to_string()
    }

    fn control(&mut self, device: &mut dyn Device, params: &[String]) {
        let Some(command) = params.first() else {
            return;
        };
        match command.as_str() {
            "ON" => device.turn_on(),
            "OFF" => device.turn_off(),
            other => {
                tracing::warn!(device = device.name(), command = other, "unknown manual command");
            }
        }
    }
}
