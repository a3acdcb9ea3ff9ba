//! Event-logging observer.

use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use domohub_domain::event::EventKind;
use domohub_domain::time::now;

use crate::device::{Device, DeviceObserver};

/// Entries kept in the in-memory log before the oldest is evicted.
const LOG_CAPACITY: usize = 100;

/// Records every event as a timestamped line, in memory and optionally
/// appended to a file. File write failures are reported and never
/// propagated to the emitting device.
pub struct LoggingObserver {
    entries: Mutex<VecDeque<String>>,
    log_file: Option<PathBuf>,
}

impl LoggingObserver {
    /// In-memory log only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            log_file: None,
        }
    }

    /// In-memory log plus append-to-file.
    #[must_use]
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            log_file: Some(path.into()),
        }
    }

    /// Snapshot of the in-memory log, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.lock_entries().iter().cloned().collect()
    }

    /// Drop all in-memory entries. The log file, if any, is untouched.
    pub fn clear(&self) {
        self.lock_entries().clear();
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceObserver for LoggingObserver {
    fn on_event(&self, device: &dyn Device, event: &EventKind, message: &str) {
        let stamp = now().format("%Y-%m-%d %H:%M:%S");
        let entry = format!("{stamp} - {} - {event} - {message}", device.name());

        {
            let mut entries = self.lock_entries();
            entries.push_back(entry.clone());
            if entries.len() > LOG_CAPACITY {
                entries.pop_front();
            }
        }

        if let Some(path) = &self.log_file {
            if let Err(err) = append_line(path, &entry) {
                tracing::warn!(%err, path = %path.display(), "failed to append to event log file");
            }
        }
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::device::{Device, NullSink};
    use crate::devices::Light;

    fn light() -> Light {
        Light::new("Hall Light", Arc::new(NullSink))
    }

    #[test]
    fn should_record_event_as_single_line() {
        let mut device = light();
        let log = Arc::new(LoggingObserver::new());
        device.add_observer(log.clone());

        device.turn_on();

        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("Hall Light"));
        assert!(entries[0].contains("STATE_CHANGED"));
        assert!(entries[0].contains("Device turned ON"));
    }

    #[test]
    fn should_serve_multiple_devices_with_one_instance() {
        let log = Arc::new(LoggingObserver::new());
        let mut first = light();
        let mut second = Light::new("Porch Light", Arc::new(NullSink));
        first.add_observer(log.clone());
        second.add_observer(log.clone());

        first.turn_on();
        second.turn_on();

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].contains("Hall Light"));
        assert!(entries[1].contains("Porch Light"));
    }

    #[test]
    fn should_evict_oldest_entries_beyond_capacity() {
        let mut device = light();
        let log = Arc::new(LoggingObserver::new());
        device.add_observer(log.clone());

        for _ in 0..60 {
            device.turn_on();
            device.turn_off();
        }
        assert_eq!(log.entries().len(), LOG_CAPACITY);
    }

    #[test]
    fn should_clear_in_memory_log() {
        let mut device = light();
        let log = Arc::new(LoggingObserver::new());
        device.add_observer(log.clone());

        device.turn_on();
        log.clear();
        assert!(log.entries().is_empty());
    }

    #[test]
    fn should_append_entries_to_file_when_configured() {
        let path = std::env::temp_dir().join(format!(
            "domohub-log-{}.txt",
            domohub_domain::id::DeviceId::new()
        ));
        let mut device = light();
        let log = Arc::new(LoggingObserver::with_file(&path));
        device.add_observer(log.clone());

        device.turn_on();
        device.turn_off();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        std::fs::remove_file(&path).ok();
    }
}
