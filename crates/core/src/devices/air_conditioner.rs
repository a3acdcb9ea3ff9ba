//! Air conditioner — target temperature, operating mode, fan speed.

use std::sync::Arc;

use domohub_domain::event::EventKind;

use crate::device::{Device, DeviceCore, NotificationSink};
use crate::devices::{device_plumbing, strategy_host};

/// Operating mode of an [`AirConditioner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcMode {
    Cool,
    Heat,
    Fan,
}

impl AcMode {
    fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "COOL" => Some(Self::Cool),
            "HEAT" => Some(Self::Heat),
            "FAN" => Some(Self::Fan),
            _ => None,
        }
    }
}

impl std::fmt::Display for AcMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cool => f.write_str("COOL"),
            Self::Heat => f.write_str("HEAT"),
            Self::Fan => f.write_str("FAN"),
        }
    }
}

/// An air conditioner with target temperature 16–30 °C, mode, and fan
/// speed 1–5.
#[derive(Debug)]
pub struct AirConditioner {
    core: DeviceCore,
    temperature: i32,
    mode: AcMode,
    fan_speed: u8,
}

impl AirConditioner {
    /// Create an air conditioner that starts OFF at 24 °C, COOL mode,
    /// fan speed 2.
    pub fn new(name: impl Into<String>, sink: Arc<dyn NotificationSink>) -> Self {
        let mut core = DeviceCore::new(name, sink);
        core.status_mut().set_attribute("temperature", "24");
        core.status_mut().set_attribute("mode", AcMode::Cool.to_string());
        core.status_mut().set_attribute("fanSpeed", "2");
        Self {
            core,
            temperature: 24,
            mode: AcMode::Cool,
            fan_speed: 2,
        }
    }

    #[must_use]
    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    #[must_use]
    pub fn mode(&self) -> AcMode {
        self.mode
    }

    #[must_use]
    pub fn fan_speed(&self) -> u8 {
        self.fan_speed
    }

    /// Set the target temperature. Values outside 16–30 °C are ignored.
    pub fn set_temperature(&mut self, temperature: i32) {
        if !(16..=30).contains(&temperature) {
            return;
        }
        self.temperature = temperature;
        self.core
            .status_mut()
            .set_attribute("temperature", temperature.to_string());
        let message = format!("Temperature set to {temperature}°C");
        self.core
            .notify(self, &EventKind::TemperatureChanged, &message);
    }

    /// Switch the operating mode.
    pub fn set_mode(&mut self, mode: AcMode) {
        self.mode = mode;
        self.core.status_mut().set_attribute("mode", mode.to_string());
        let message = format!("Mode set to {mode}");
        self.core.notify(self, &EventKind::ModeChanged, &message);
    }

    /// Set the fan speed. Values outside 1–5 are ignored.
    pub fn set_fan_speed(&mut self, fan_speed: u8) {
        if !(1..=5).contains(&fan_speed) {
            return;
        }
        self.fan_speed = fan_speed;
        self.core
            .status_mut()
            .set_attribute("fanSpeed", fan_speed.to_string());
        let message = format!("Fan speed set to {fan_speed}");
        self.core
            .notify(self, &EventKind::FanSpeedChanged, &message);
    }
}

strategy_host!(AirConditioner);

impl Device for AirConditioner {
    device_plumbing!();

    fn execute_action(&mut self, action: &str, params: &[String]) {
        match action {
            "SET_TEMP" => match params.first().map(|raw| raw.parse::<i32>()) {
                Some(Ok(temperature)) => self.set_temperature(temperature),
                Some(Err(_)) => tracing::warn!("invalid temperature parameter"),
                None => {}
            },
            "SET_MODE" => {
                if let Some(raw) = params.first() {
                    match AcMode::from_param(raw) {
                        Some(mode) => self.set_mode(mode),
                        None => tracing::warn!(mode = raw.as_str(), "unsupported mode"),
                    }
                }
            }
            "SET_FAN" => match params.first().map(|raw| raw.parse::<i64>()) {
                Some(Ok(value)) => {
                    if let Ok(fan_speed) = u8::try_from(value) {
                        self.set_fan_speed(fan_speed);
                    }
                }
                Some(Err(_)) => tracing::warn!("invalid fan speed parameter"),
                None => {}
            },
            _ => self.delegate_to_strategy(params),
        }
    }
}
