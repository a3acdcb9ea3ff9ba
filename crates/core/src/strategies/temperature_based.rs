//! Temperature-based control — threshold plus direction.

use crate::device::Device;
use crate::strategies::{ControlStrategy, ManualControl};

/// Which side of the threshold turns the device on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdMode {
    /// Turn on when the temperature is strictly above the threshold
    /// (cooling scenarios).
    Above,
    /// Turn on when the temperature is strictly below the threshold
    /// (heating scenarios).
    Below,
}

impl ThresholdMode {
    fn from_param(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("above") {
            Self::Above
        } else {
            Self::Below
        }
    }
}

impl std::fmt::Display for ThresholdMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Above => f.write_str("above"),
            Self::Below => f.write_str("below"),
        }
    }
}

/// Forces a device's power state from a reported temperature.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureBasedControl {
    threshold: f64,
    mode: ThresholdMode,
}

impl TemperatureBasedControl {
    /// Build a policy with the given threshold (°C) and direction.
    #[must_use]
    pub fn new(threshold: f64, mode: ThresholdMode) -> Self {
        Self { threshold, mode }
    }

    /// The current threshold in °C.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The current direction.
    #[must_use]
    pub fn mode(&self) -> ThresholdMode {
        self.mode
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    pub fn set_mode(&mut self, mode: ThresholdMode) {
        self.mode = mode;
    }

    /// Force the device to the state the policy prescribes for the given
    /// temperature. Idempotent: no event when already in the correct
    /// state.
    pub fn check_at(&self, device: &mut dyn Device, current: f64) {
        let should_be_on = match self.mode {
            ThresholdMode::Above => current > self.threshold,
            ThresholdMode::Below => current < self.threshold,
        };
        if should_be_on {
            device.turn_on();
        } else {
            device.turn_off();
        }
    }
}

impl ControlStrategy for TemperatureBasedControl {
    fn name(&self) -> String {
        format!(
            "Temperature-based Control (Turn ON when {} {}°C)",
            self.mode, self.threshold
        )
    }

    fn control(&mut self, device: &mut dyn Device, params: &[String]) {
        let Some(command) = params.first() else {
            return;
        };
        match command.as_str() {
            "CHECK" => match params.get(1).map(|raw| raw.parse::<f64>()) {
                Some(Ok(current)) => self.check_at(device, current),
                Some(Err(_)) => tracing::warn!("invalid temperature parameter"),
                None => tracing::warn!("CHECK requires a temperature parameter"),
            },
            "SET_THRESHOLD" => match params.get(1).map(|raw| raw.parse::<f64>()) {
                Some(Ok(threshold)) => {
                    self.threshold = threshold;
                    tracing::info!(threshold, "temperature threshold updated");
                }
                Some(Err(_)) => tracing::warn!("invalid threshold parameter"),
                None => tracing::warn!("SET_THRESHOLD requires a value"),
            },
            "SET_MODE" => {
                if let Some(raw) = params.get(1) {
                    self.mode = ThresholdMode::from_param(raw);
                    tracing::info!(mode = %self.mode, "threshold direction updated");
                } else {
                    tracing::warn!("SET_MODE requires above or below");
                }
            }
            _ => {
                let mut manual = ManualControl;
                manual.control(device, params);
            }
        }
    }
}
