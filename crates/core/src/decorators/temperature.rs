//! Temperature sensing decorator.

use domohub_domain::event::EventKind;
use domohub_domain::status::DeviceStatus;

use crate::device::Device;
use crate::decorators::{decorator_accessors, forward_device_plumbing};
use crate::rng::SensorRng;

/// Layers a simulated temperature sensor onto any device. Readings drift
/// by a small bounded random delta; exceeding the warning threshold
/// emits `TEMPERATURE_WARNING` through the wrapped device's observers.
pub struct TemperatureSensor {
    inner: Box<dyn Device>,
    current: f64,
    warning_threshold: f64,
    rng: SensorRng,
}

impl TemperatureSensor {
    /// Wrap a device. Starts at 22.0 °C with a 40.0 °C warning threshold.
    #[must_use]
    pub fn new(inner: Box<dyn Device>) -> Self {
        Self::with_rng(inner, SensorRng::new())
    }

    /// Wrap a device with an explicit random source (reproducible runs).
    #[must_use]
    pub fn with_rng(inner: Box<dyn Device>, rng: SensorRng) -> Self {
        Self {
            inner,
            current: 22.0,
            warning_threshold: 40.0,
            rng,
        }
    }

    decorator_accessors!();

    /// The most recent reading in °C.
    #[must_use]
    pub fn current_temperature(&self) -> f64 {
        self.current
    }

    /// The warning threshold in °C.
    #[must_use]
    pub fn warning_threshold(&self) -> f64 {
        self.warning_threshold
    }

    /// Reconfigure the warning threshold.
    pub fn set_warning_threshold(&mut self, threshold: f64) {
        self.warning_threshold = threshold;
    }

    /// Take a reading: perturb the current value by a delta in (-1, +1),
    /// rounded to one decimal, then re-check the warning threshold.
    pub fn read_temperature(&mut self) {
        let delta = self.rng.delta(1.0);
        self.current = ((self.current + delta) * 10.0).round() / 10.0;
        tracing::info!(
            device = self.inner.name(),
            temperature = self.current,
            "temperature sensor reading"
        );
        self.check_threshold();
    }

    /// Pin the reading to an exact value, for scripted scenarios.
    pub fn set_temperature(&mut self, temperature: f64) {
        self.current = temperature;
        tracing::info!(
            device = self.inner.name(),
            temperature = self.current,
            "temperature reading pinned"
        );
        self.check_threshold();
    }

    fn check_threshold(&self) {
        if self.current > self.warning_threshold {
            let message = format!(
                "Temperature is too high: {:.1}°C (Threshold: {:.1}°C)",
                self.current, self.warning_threshold
            );
            self.inner
                .notify_observers(&EventKind::TemperatureWarning, &message);
        }
    }
}

impl Device for TemperatureSensor {
    forward_device_plumbing!();

    fn status(&self) -> DeviceStatus {
        let mut status = self.inner.status();
        status.set_attribute("temperatureSensor", format!("{:.1}", self.current));
        status.set_attribute(
            "temperatureWarningThreshold",
            format!("{:.1}", self.warning_threshold),
        );
        status
    }

    fn execute_action(&mut self, action: &str, params: &[String]) {
        match action {
            "READ_TEMPERATURE" => self.read_temperature(),
            "SET_TEMPERATURE" => match params.first().map(|raw| raw.parse::<f64>()) {
                Some(Ok(temperature)) => self.set_temperature(temperature),
                Some(Err(_)) => tracing::warn!("invalid temperature parameter"),
                None => {}
            },
            "SET_THRESHOLD" => match params.first().map(|raw| raw.parse::<f64>()) {
                Some(Ok(threshold)) => self.set_warning_threshold(threshold),
                Some(Err(_)) => tracing::warn!("invalid threshold parameter"),
                None => {}
            },
            _ => self.inner.execute_action(action, params),
        }
    }
}
