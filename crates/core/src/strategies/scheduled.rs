//! Scheduled control — a daily on/off window.

use chrono::NaiveTime;

use domohub_domain::time::{TimeWindow, parse_time_of_day};

use crate::device::Device;
use crate::strategies::{ControlStrategy, ManualControl};

/// Forces a device on inside a daily time window and off outside it.
/// Overnight windows (on-time later than off-time) are supported.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledControl {
    window: TimeWindow,
}

impl Default for ScheduledControl {
    /// On at 08:00, off at 22:00.
    fn default() -> Self {
        Self {
            window: TimeWindow::new(
                NaiveTime::from_hms_opt(8, 0, 0).expect("valid time"),
                NaiveTime::from_hms_opt(22, 0, 0).expect("valid time"),
            ),
        }
    }
}

impl ScheduledControl {
    /// Build a schedule from explicit on/off times.
    #[must_use]
    pub fn new(on: NaiveTime, off: NaiveTime) -> Self {
        Self {
            window: TimeWindow::new(on, off),
        }
    }

    /// The current window.
    #[must_use]
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Force the device to the power state the window prescribes for
    /// `now`. Idempotent: a device already in the correct state emits
    /// no event.
    pub fn check_at(&self, device: &mut dyn Device, now: NaiveTime) {
        if self.window.contains(now) {
            device.turn_on();
        } else {
            device.turn_off();
        }
    }
}

impl ControlStrategy for ScheduledControl {
    fn name(&self) -> String {
        format!(
            "Scheduled Control (ON: {}, OFF: {})",
            self.window.on.format("%H:%M"),
            self.window.off.format("%H:%M")
        )
    }

    fn control(&mut self, device: &mut dyn Device, params: &[String]) {
        let Some(command) = params.first() else {
            return;
        };
        match command.as_str() {
            "CHECK" => self.check_at(device, chrono::Local::now().time()),
            "SET_ON_TIME" => match params.get(1).map(|raw| parse_time_of_day(raw)) {
                Some(Ok(time)) => {
                    self.window.on = time;
                    tracing::info!(on = %time.format("%H:%M"), "schedule on-time updated");
                }
                Some(Err(err)) => tracing::warn!(%err, "rejected on-time"),
                None => tracing::warn!("SET_ON_TIME requires a time parameter"),
            },
            "SET_OFF_TIME" => match params.get(1).map(|raw| parse_time_of_day(raw)) {
                Some(Ok(time)) => {
                    self.window.off = time;
                    tracing::info!(off = %time.format("%H:%M"), "schedule off-time updated");
                }
                Some(Err(err)) => tracing::warn!(%err, "rejected off-time"),
                None => tracing::warn!("SET_OFF_TIME requires a time parameter"),
            },
            _ => {
                let mut manual = ManualControl;
                manual.control(device, params);
            }
        }
    }
}
