//! Fan — speed levels and oscillation.

use std::sync::Arc;

use domohub_domain::event::EventKind;

use crate::device::{Device, DeviceCore, NotificationSink};
use crate::devices::{device_plumbing, strategy_host};

/// A fan with speed 0–5 (0 is off) and an oscillation toggle.
#[derive(Debug)]
pub struct Fan {
    core: DeviceCore,
    speed: u8,
    oscillating: bool,
}

impl Fan {
    /// Create a fan that starts OFF at speed 1, not oscillating.
    pub fn new(name: impl Into<String>, sink: Arc<dyn NotificationSink>) -> Self {
        let mut core = DeviceCore::new(name, sink);
        core.status_mut().set_attribute("speed", "1");
        core.status_mut().set_attribute("oscillating", "false");
        Self {
            core,
            speed: 1,
            oscillating: false,
        }
    }

    #[must_use]
    pub fn speed(&self) -> u8 {
        self.speed
    }

    #[must_use]
    pub fn is_oscillating(&self) -> bool {
        self.oscillating
    }

    /// Set the speed level. Values above 5 are ignored. Speed 0 turns a
    /// running fan off; a non-zero speed turns a stopped fan on.
    pub fn set_speed(&mut self, speed: u8) {
        if speed > 5 {
            return;
        }
        self.speed = speed;
        self.core
            .status_mut()
            .set_attribute("speed", speed.to_string());

        if speed == 0 && self.core.is_on() {
            self.turn_off();
        } else if speed > 0 && !self.core.is_on() {
            self.turn_on();
        }

        let message = format!("Fan speed set to {speed}");
        self.core.notify(self, &EventKind::SpeedChanged, &message);
    }

    /// Toggle oscillation.
    pub fn set_oscillating(&mut self, oscillating: bool) {
        self.oscillating = oscillating;
        self.core
            .status_mut()
            .set_attribute("oscillating", oscillating.to_string());
        let message = format!(
            "Oscillation {}",
            if oscillating { "enabled" } else { "disabled" }
        );
        self.core
            .notify(self, &EventKind::OscillationChanged, &message);
    }
}

strategy_host!(Fan);

impl Device for Fan {
    device_plumbing!();

    fn execute_action(&mut self, action: &str, params: &[String]) {
        match action {
            "SET_SPEED" => match params.first().map(|raw| raw.parse::<i64>()) {
                Some(Ok(value)) => {
                    if let Ok(speed) = u8::try_from(value) {
                        self.set_speed(speed);
                    }
                }
                Some(Err(_)) => tracing::warn!("invalid speed parameter"),
                None => {}
            },
            "SET_OSCILLATE" => match params.first().map(|raw| raw.parse::<bool>()) {
                Some(Ok(oscillating)) => self.set_oscillating(oscillating),
                Some(Err(_)) => tracing::warn!("invalid oscillation parameter"),
                None => {}
            },
            _ => self.delegate_to_strategy(params),
        }
    }
}
