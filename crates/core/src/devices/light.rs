//! Light — dimmable, color-adjustable.

use std::sync::Arc;

use domohub_domain::event::EventKind;

use crate::device::{Device, DeviceCore, NotificationSink};
use crate::devices::{device_plumbing, strategy_host};

/// A light with brightness (0–100 %) and a free-form color.
#[derive(Debug)]
pub struct Light {
    core: DeviceCore,
    brightness: u8,
    color: String,
}

impl Light {
    /// Create a light that starts OFF at full brightness, white.
    pub fn new(name: impl Into<String>, sink: Arc<dyn NotificationSink>) -> Self {
        let mut core = DeviceCore::new(name, sink);
        core.status_mut().set_attribute("brightness", "100");
        core.status_mut().set_attribute("color", "White");
        Self {
            core,
            brightness: 100,
            color: "White".to_string(),
        }
    }

    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Set brightness in percent. Values above 100 are ignored and the
    /// prior value retained.
    pub fn set_brightness(&mut self, brightness: u8) {
        if brightness > 100 {
            return;
        }
        self.brightness = brightness;
        self.core
            .status_mut()
            .set_attribute("brightness", brightness.to_string());
        let message = format!("Brightness set to {brightness}%");
        self.core
            .notify(self, &EventKind::BrightnessChanged, &message);
    }

    /// Set the color. No validation on the value.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.core
            .status_mut()
            .set_attribute("color", self.color.clone());
        let message = format!("Color set to {}", self.color);
        self.core.notify(self, &EventKind::ColorChanged, &message);
    }
}

strategy_host!(Light);

impl Device for Light {
    device_plumbing!();

    fn execute_action(&mut self, action: &str, params: &[String]) {
        match action {
            "DIM" => match params.first().map(|raw| raw.parse::<i64>()) {
                Some(Ok(value)) => {
                    if let Ok(brightness) = u8::try_from(value) {
                        self.set_brightness(brightness);
                    }
                }
                Some(Err(_)) => tracing::warn!("invalid brightness parameter"),
                None => {}
            },
            "COLOR" => {
                if let Some(color) = params.first() {
                    self.set_color(color.clone());
                }
            }
            _ => self.delegate_to_strategy(params),
        }
    }
}
