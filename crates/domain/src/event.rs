//! Event kinds — the vocabulary of device notifications.
//!
//! Observers and the notification sink receive events by kind plus a
//! human-readable message. The wire form is the SCREAMING_SNAKE name
//! (`STATE_CHANGED`, `MOTION_DETECTED`, …); unknown names round-trip
//! through [`EventKind::Custom`].

/// A device event classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Power state flipped on or off.
    StateChanged,
    /// Light brightness reconfigured.
    BrightnessChanged,
    /// Light color reconfigured.
    ColorChanged,
    /// Fan speed reconfigured.
    SpeedChanged,
    /// Fan oscillation toggled.
    OscillationChanged,
    /// Air-conditioner target temperature reconfigured.
    TemperatureChanged,
    /// Operating mode changed (air conditioner or camera).
    ModeChanged,
    /// Air-conditioner fan speed reconfigured.
    FanSpeedChanged,
    /// Motion sensor transitioned to detected.
    MotionDetected,
    /// Motion sensor transitioned to clear.
    MotionStopped,
    /// Temperature reading breached the warning threshold.
    TemperatureWarning,
    /// Humidity reading breached a warning threshold.
    HumidityWarning,
    /// Camera saw motion while in away mode.
    SecurityAlert,
    /// Camera saw motion while in pet mode.
    PetActivity,
    /// Escalation raised by the security observer.
    CriticalSecurityAlert,
    /// Any event name outside the built-in vocabulary.
    Custom(String),
}

impl EventKind {
    /// The wire-form name of the event.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::StateChanged => "STATE_CHANGED",
            Self::BrightnessChanged => "BRIGHTNESS_CHANGED",
            Self::ColorChanged => "COLOR_CHANGED",
            Self::SpeedChanged => "SPEED_CHANGED",
            Self::OscillationChanged => "OSCILLATION_CHANGED",
            Self::TemperatureChanged => "TEMPERATURE_CHANGED",
            Self::ModeChanged => "MODE_CHANGED",
            Self::FanSpeedChanged => "FAN_SPEED_CHANGED",
            Self::MotionDetected => "MOTION_DETECTED",
            Self::MotionStopped => "MOTION_STOPPED",
            Self::TemperatureWarning => "TEMPERATURE_WARNING",
            Self::HumidityWarning => "HUMIDITY_WARNING",
            Self::SecurityAlert => "SECURITY_ALERT",
            Self::PetActivity => "PET_ACTIVITY",
            Self::CriticalSecurityAlert => "CRITICAL_SECURITY_ALERT",
            Self::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EventKind {
    fn from(name: &str) -> Self {
        match name {
            "STATE_CHANGED" => Self::StateChanged,
            "BRIGHTNESS_CHANGED" => Self::BrightnessChanged,
            "COLOR_CHANGED" => Self::ColorChanged,
            "SPEED_CHANGED" => Self::SpeedChanged,
            "OSCILLATION_CHANGED" => Self::OscillationChanged,
            "TEMPERATURE_CHANGED" => Self::TemperatureChanged,
            "MODE_CHANGED" => Self::ModeChanged,
            "FAN_SPEED_CHANGED" => Self::FanSpeedChanged,
            "MOTION_DETECTED" => Self::MotionDetected,
            "MOTION_STOPPED" => Self::MotionStopped,
            "TEMPERATURE_WARNING" => Self::TemperatureWarning,
            "HUMIDITY_WARNING" => Self::HumidityWarning,
            "SECURITY_ALERT" => Self::SecurityAlert,
            "PET_ACTIVITY" => Self::PetActivity,
            "CRITICAL_SECURITY_ALERT" => Self::CriticalSecurityAlert,
            other => Self::Custom(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_wire_form_name() {
        assert_eq!(EventKind::StateChanged.to_string(), "STATE_CHANGED");
        assert_eq!(EventKind::MotionDetected.to_string(), "MOTION_DETECTED");
    }

    #[test]
    fn should_parse_known_names_to_variants() {
        assert_eq!(EventKind::from("STATE_CHANGED"), EventKind::StateChanged);
        assert_eq!(
            EventKind::from("CRITICAL_SECURITY_ALERT"),
            EventKind::CriticalSecurityAlert
        );
    }

    #[test]
    fn should_keep_unknown_names_as_custom() {
        let kind = EventKind::from("DOOR_OPENED");
        assert_eq!(kind, EventKind::Custom("DOOR_OPENED".to_string()));
        assert_eq!(kind.as_str(), "DOOR_OPENED");
    }

    #[test]
    fn should_roundtrip_every_builtin_kind() {
        let kinds = [
            EventKind::StateChanged,
            EventKind::BrightnessChanged,
            EventKind::ColorChanged,
            EventKind::SpeedChanged,
            EventKind::OscillationChanged,
            EventKind::TemperatureChanged,
            EventKind::ModeChanged,
            EventKind::FanSpeedChanged,
            EventKind::MotionDetected,
            EventKind::MotionStopped,
            EventKind::TemperatureWarning,
            EventKind::HumidityWarning,
            EventKind::SecurityAlert,
            EventKind::PetActivity,
            EventKind::CriticalSecurityAlert,
        ];
        for kind in kinds {
            assert_eq!(EventKind::from(kind.as_str()), kind);
        }
    }
}
