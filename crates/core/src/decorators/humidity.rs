//! Humidity sensing decorator.

use domohub_domain::event::EventKind;
use domohub_domain::status::DeviceStatus;

use crate::device::Device;
use crate::decorators::{decorator_accessors, forward_device_plumbing};
use crate::rng::SensorRng;

/// Layers a simulated humidity sensor onto any device. Readings are
/// clamped to 0–100 %; crossing either warning threshold emits
/// `HUMIDITY_WARNING` naming the breached bound.
pub struct HumiditySensor {
    inner: Box<dyn Device>,
    current: f64,
    threshold_high: f64,
    threshold_low: f64,
    rng: SensorRng,
}

impl HumiditySensor {
    /// Wrap a device. Starts at 50.0 % with warning thresholds 30.0 and
    /// 70.0.
    #[must_use]
    pub fn new(inner: Box<dyn Device>) -> Self {
        Self::with_rng(inner, SensorRng::new())
    }

    /// Wrap a device with an explicit random source (reproducible runs).
    #[must_use]
    pub fn with_rng(inner: Box<dyn Device>, rng: SensorRng) -> Self {
        Self {
            inner,
            current: 50.0,
            threshold_high: 70.0,
            threshold_low: 30.0,
            rng,
        }
    }

    decorator_accessors!();

    /// The most recent reading in percent.
    #[must_use]
    pub fn current_humidity(&self) -> f64 {
        self.current
    }

    /// Reconfigure both warning thresholds.
    pub fn set_warning_thresholds(&mut self, low: f64, high: f64) {
        self.threshold_low = low;
        self.threshold_high = high;
    }

    /// Take a reading: perturb the current value by a delta in (-2, +2),
    /// clamp to 0–100, round to one decimal, then re-check thresholds.
    pub fn read_humidity(&mut self) {
        let delta = self.rng.delta(2.0);
        self.current = ((self.current + delta).clamp(0.0, 100.0) * 10.0).round() / 10.0;
        tracing::info!(
            device = self.inner.name(),
            humidity = self.current,
            "humidity sensor reading"
        );
        self.check_thresholds();
    }

    /// Pin the reading to an exact value. Values outside 0–100 are
    /// ignored and the prior reading retained.
    pub fn set_humidity(&mut self, humidity: f64) {
        if !(0.0..=100.0).contains(&humidity) {
            return;
        }
        self.current = humidity;
        tracing::info!(
            device = self.inner.name(),
            humidity = self.current,
            "humidity reading pinned"
        );
        self.check_thresholds();
    }

    fn check_thresholds(&self) {
        if self.current > self.threshold_high {
            let message = format!(
                "Humidity is too high: {:.1}% (Threshold: {:.1}%)",
                self.current, self.threshold_high
            );
            self.inner
                .notify_observers(&EventKind::HumidityWarning, &message);
        } else if self.current < self.threshold_low {
            let message = format!(
                "Humidity is too low: {:.1}% (Threshold: {:.1}%)",
                self.current, self.threshold_low
            );
            self.inner
                .notify_observers(&EventKind::HumidityWarning, &message);
        }
    }
}

impl Device for HumiditySensor {
    forward_device_plumbing!();

    fn status(&self) -> DeviceStatus {
        let mut status = self.inner.status();
        status.set_attribute("humiditySensor", format!("{:.1}", self.current));
        status.set_attribute(
            "humidityWarningThresholdHigh",
            format!("{:.1}", self.threshold_high),
        );
        status.set_attribute(
            "humidityWarningThresholdLow",
            format!("{:.1}", self.threshold_low),
        );
        status
    }

    fn execute_action(&mut self, action: &str, params: &[String]) {
        match action {
            "READ_HUMIDITY" => self.read_humidity(),
            "SET_HUMIDITY" => match params.first().map(|raw| raw.parse::<f64>()) {
                Some(Ok(humidity)) => self.set_humidity(humidity),
                Some(Err(_)) => tracing::warn!("invalid humidity parameter"),
                None => {}
            },
            "SET_HUMIDITY_THRESHOLDS" => {
                let parsed = (
                    params.first().map(|raw| raw.parse::<f64>()),
                    params.get(1).map(|raw| raw.parse::<f64>()),
                );
                match parsed {
                    (Some(Ok(low)), Some(Ok(high))) => self.set_warning_thresholds(low, high),
                    (None, _) | (_, None) => {
                        tracing::warn!("SET_HUMIDITY_THRESHOLDS requires low and high values");
                    }
                    _ => tracing::warn!("invalid threshold parameters"),
                }
            }
            _ => self.inner.execute_action(action, params),
        }
    }
}
