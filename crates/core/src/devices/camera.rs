//! Camera — surveillance modes, motion response, recording.

use std::sync::Arc;

use domohub_domain::event::EventKind;

use crate::device::{Device, DeviceCore, NotificationSink};
use crate::devices::{device_plumbing, strategy_host};

/// Surveillance mode of a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// No escalation on motion.
    Normal,
    /// Motion triggers photo capture, recording, and a security alert.
    Away,
    /// Motion triggers photo capture and a pet-activity event.
    Pet,
}

impl CameraMode {
    fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "NORMAL" => Some(Self::Normal),
            "AWAY" => Some(Self::Away),
            "PET" => Some(Self::Pet),
            _ => None,
        }
    }
}

impl std::fmt::Display for CameraMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => f.write_str("NORMAL"),
            Self::Away => f.write_str("AWAY"),
            Self::Pet => f.write_str("PET"),
        }
    }
}

/// Camera-mode capability, reachable through a decorator chain without
/// inspecting concrete types.
pub trait CameraControls {
    /// Current surveillance mode.
    fn mode(&self) -> CameraMode;

    /// Switch the surveillance mode.
    fn set_mode(&mut self, mode: CameraMode);

    /// Feed a motion signal to the camera. The response depends on the
    /// active mode.
    fn signal_motion(&mut self, detected: bool);
}

/// A camera with surveillance modes and automatic recording.
#[derive(Debug)]
pub struct Camera {
    core: DeviceCore,
    mode: CameraMode,
    motion_detected: bool,
    recording: bool,
}

impl Camera {
    /// Create a camera that starts OFF in NORMAL mode, no motion, not
    /// recording.
    pub fn new(name: impl Into<String>, sink: Arc<dyn NotificationSink>) -> Self {
        let mut core = DeviceCore::new(name, sink);
        core.status_mut()
            .set_attribute("mode", CameraMode::Normal.to_string());
        core.status_mut().set_attribute("motionDetected", "false");
        core.status_mut().set_attribute("recordingActive", "false");
        Self {
            core,
            mode: CameraMode::Normal,
            motion_detected: false,
            recording: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    #[must_use]
    pub fn is_motion_detected(&self) -> bool {
        self.motion_detected
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Switch the surveillance mode.
    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
        self.core.status_mut().set_attribute("mode", mode.to_string());
        let message = format!("Camera mode set to {mode}");
        self.core.notify(self, &EventKind::ModeChanged, &message);
    }

    /// React to a motion signal according to the active mode. Recording
    /// stops automatically when motion clears while active.
    pub fn signal_motion(&mut self, detected: bool) {
        self.motion_detected = detected;
        self.core
            .status_mut()
            .set_attribute("motionDetected", detected.to_string());

        if detected {
            tracing::info!(device = self.core.name(), "motion detected");
            match self.mode {
                CameraMode::Away => {
                    self.take_photo();
                    self.start_recording();
                    self.core.notify(
                        self,
                        &EventKind::SecurityAlert,
                        "Motion detected while in AWAY mode!",
                    );
                }
                CameraMode::Pet => {
                    self.take_photo();
                    self.core
                        .notify(self, &EventKind::PetActivity, "Pet activity detected");
                }
                CameraMode::Normal => {}
            }
        } else if self.recording {
            self.stop_recording();
        }
    }

    /// Capture a still frame (simulated).
    pub fn take_photo(&self) {
        tracing::info!(device = self.core.name(), "photo taken");
    }

    /// Begin recording if not already active.
    pub fn start_recording(&mut self) {
        if !self.recording {
            self.recording = true;
            self.core.status_mut().set_attribute("recordingActive", "true");
            tracing::info!(device = self.core.name(), "recording started");
        }
    }

    /// Stop recording if active.
    pub fn stop_recording(&mut self) {
        if self.recording {
            self.recording = false;
            self.core
                .status_mut()
                .set_attribute("recordingActive", "false");
            tracing::info!(device = self.core.name(), "recording stopped");
        }
    }
}

strategy_host!(Camera);

impl CameraControls for Camera {
    fn mode(&self) -> CameraMode {
        self.mode
    }

    fn set_mode(&mut self, mode: CameraMode) {
        Self::set_mode(self, mode);
    }

    fn signal_motion(&mut self, detected: bool) {
        Self::signal_motion(self, detected);
    }
}

impl Device for Camera {
    device_plumbing!();

    fn execute_action(&mut self, action: &str, params: &[String]) {
        match action {
            "SET_MODE" => {
                if let Some(raw) = params.first() {
                    match CameraMode::from_param(raw) {
                        Some(mode) => self.set_mode(mode),
                        None => tracing::warn!(mode = raw.as_str(), "unsupported camera mode"),
                    }
                }
            }
            "SIMULATE_MOTION" => match params.first().map(|raw| raw.parse::<bool>()) {
                Some(Ok(detected)) => self.signal_motion(detected),
                Some(Err(_)) => tracing::warn!("invalid motion parameter"),
                None => {}
            },
            "TAKE_PHOTO" => self.take_photo(),
            "START_RECORDING" => self.start_recording(),
            "STOP_RECORDING" => self.stop_recording(),
            _ => self.delegate_to_strategy(params),
        }
    }

    fn camera_controls(&mut self) -> Option<&mut dyn CameraControls> {
        Some(self)
    }
}
