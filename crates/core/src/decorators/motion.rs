//! Motion sensing decorator.

use std::collections::VecDeque;

use domohub_domain::event::EventKind;
use domohub_domain::status::DeviceStatus;

use crate::device::Device;
use crate::decorators::{decorator_accessors, forward_device_plumbing};
use crate::rng::SensorRng;

/// Detection entries kept in the rolling motion log.
const MOTION_LOG_CAPACITY: usize = 20;

/// Layers a simulated motion sensor onto any device. Only actual state
/// transitions emit events: repeated identical readings are silent.
pub struct MotionSensor {
    inner: Box<dyn Device>,
    detected: bool,
    sensitivity: u8,
    events: VecDeque<String>,
    rng: SensorRng,
}

impl MotionSensor {
    /// Wrap a device. Starts clear with medium sensitivity (3).
    #[must_use]
    pub fn new(inner: Box<dyn Device>) -> Self {
        Self::with_rng(inner, SensorRng::new())
    }

    /// Wrap a device with an explicit random source (reproducible runs).
    #[must_use]
    pub fn with_rng(inner: Box<dyn Device>, rng: SensorRng) -> Self {
        Self {
            inner,
            detected: false,
            sensitivity: 3,
            events: VecDeque::new(),
            rng,
        }
    }

    decorator_accessors!();

    /// Whether motion is currently detected.
    #[must_use]
    pub fn is_motion_detected(&self) -> bool {
        self.detected
    }

    /// The sensitivity level, 1–5.
    #[must_use]
    pub fn sensitivity(&self) -> u8 {
        self.sensitivity
    }

    /// Set the sensitivity level. Values outside 1–5 are ignored.
    /// Higher sensitivity lowers the simulated detection threshold.
    pub fn set_sensitivity(&mut self, level: u8) {
        if !(1..=5).contains(&level) {
            return;
        }
        self.sensitivity = level;
        tracing::info!(
            device = self.inner.name(),
            sensitivity = level,
            "motion sensitivity updated"
        );
    }

    /// Take a simulated reading biased by sensitivity, then apply the
    /// transition rules.
    pub fn detect_motion(&mut self) {
        let threshold = u32::from(6 - self.sensitivity);
        let detected = self.rng.roll(10) >= threshold;
        self.apply_reading(detected, "Motion detected");
    }

    /// Force a reading, for scripted scenarios.
    pub fn simulate_motion(&mut self, detected: bool) {
        self.apply_reading(detected, "Motion simulated");
    }

    /// Timestamped snapshot of the rolling detection log, oldest first.
    #[must_use]
    pub fn motion_events(&self) -> Vec<String> {
        self.events.iter().cloned().collect()
    }

    fn apply_reading(&mut self, detected: bool, note: &str) {
        if self.detected == detected {
            return;
        }
        self.detected = detected;
        if detected {
            self.record_entry(note);
            let message = format!("Motion detected by {}", self.inner.name());
            self.inner
                .notify_observers(&EventKind::MotionDetected, &message);
        } else {
            let message = format!("Motion stopped at {}", self.inner.name());
            self.inner
                .notify_observers(&EventKind::MotionStopped, &message);
        }
    }

    fn record_entry(&mut self, note: &str) {
        let stamp = domohub_domain::time::now().format("%Y-%m-%d %H:%M:%S");
        self.events.push_back(format!("{stamp} - {note}"));
        if self.events.len() > MOTION_LOG_CAPACITY {
            self.events.pop_front();
        }
    }
}

impl Device for MotionSensor {
    forward_device_plumbing!();

    fn status(&self) -> DeviceStatus {
        let mut status = self.inner.status();
        status.set_attribute("motionSensor", self.detected.to_string());
        status.set_attribute("motionSensitivity", self.sensitivity.to_string());
        status.set_attribute("motionEventsCount", self.events.len().to_string());
        status
    }

    fn execute_action(&mut self, action: &str, params: &[String]) {
        match action {
            "DETECT_MOTION" => self.detect_motion(),
            "SIMULATE_MOTION" => match params.first().map(|raw| raw.parse::<bool>()) {
                Some(Ok(detected)) => self.simulate_motion(detected),
                Some(Err(_)) => tracing::warn!("invalid motion parameter"),
                None => {}
            },
            "SET_SENSITIVITY" => match params.first().map(|raw| raw.parse::<i64>()) {
                Some(Ok(value)) => {
                    if let Ok(level) = u8::try_from(value) {
                        self.set_sensitivity(level);
                    }
                }
                Some(Err(_)) => tracing::warn!("invalid sensitivity parameter"),
                None => {}
            },
            "GET_MOTION_EVENTS" => {
                for entry in &self.events {
                    tracing::info!(device = self.inner.name(), entry = entry.as_str(), "motion log");
                }
            }
            _ => self.inner.execute_action(action, params),
        }
    }
}
