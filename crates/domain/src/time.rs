//! Time and timestamp helpers.

use chrono::{DateTime, NaiveTime, Utc};

use crate::error::ParseTimeError;

/// UTC timestamp used for log entries, motion records, event times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse a `HH:MM` (seconds optional) time-of-day string.
///
/// # Errors
///
/// Returns [`ParseTimeError`] when the input matches neither format.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, ParseTimeError> {
    NaiveTime::parse_from_str(input, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M:%S"))
        .map_err(|_| ParseTimeError {
            input: input.to_string(),
        })
}

/// A daily on/off window, e.g. on at 08:00, off at 22:00.
///
/// When the on-time is later than the off-time the window spans midnight
/// (on at 22:00, off at 06:00 means "on overnight").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Start of the window.
    pub on: NaiveTime,
    /// End of the window.
    pub off: NaiveTime,
}

impl TimeWindow {
    /// Build a window from two times of day.
    #[must_use]
    pub fn new(on: NaiveTime, off: NaiveTime) -> Self {
        Self { on, off }
    }

    /// Whether `time` falls inside the window, bounds inclusive.
    ///
    /// An overnight window (on later than off) contains a time when it is
    /// at or after the on-time **or** at or before the off-time.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.on <= self.off {
            self.on <= time && time <= self.off
        } else {
            time >= self.on || time <= self.off
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}",
            self.on.format("%H:%M"),
            self.off.format("%H:%M")
        )
    }
}
