//! Security-monitoring observer.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use domohub_domain::event::EventKind;
use domohub_domain::time::now;

use crate::device::{Device, DeviceObserver, NotificationSink};

/// Entries kept in the security log before the oldest is evicted.
const SECURITY_LOG_CAPACITY: usize = 50;

/// Classifies incoming events against a configurable set of critical
/// kinds and escalates matches as `CRITICAL_SECURITY_ALERT` through its
/// own notification sink. Can be disabled without detaching it from
/// devices.
pub struct SecurityObserver {
    enabled: AtomicBool,
    events: Mutex<VecDeque<String>>,
    critical_kinds: Mutex<Vec<EventKind>>,
    sink: Arc<dyn NotificationSink>,
}

impl SecurityObserver {
    /// Monitoring enabled, with the default critical set: motion
    /// detection, security alerts, temperature warnings.
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            enabled: AtomicBool::new(true),
            events: Mutex::new(VecDeque::new()),
            critical_kinds: Mutex::new(vec![
                EventKind::MotionDetected,
                EventKind::SecurityAlert,
                EventKind::TemperatureWarning,
            ]),
            sink,
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
        tracing::info!("security monitoring enabled");
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
        tracing::info!("security monitoring disabled");
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Add an event kind to the critical set. Duplicates are ignored.
    pub fn add_critical_kind(&self, kind: EventKind) {
        let mut kinds = self.lock_kinds();
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    /// Remove an event kind from the critical set.
    pub fn remove_critical_kind(&self, kind: &EventKind) {
        self.lock_kinds().retain(|existing| existing != kind);
    }

    /// Whether the kind is currently classified as critical.
    #[must_use]
    pub fn is_critical(&self, kind: &EventKind) -> bool {
        self.lock_kinds().contains(kind)
    }

    /// Snapshot of the security log, oldest first.
    #[must_use]
    pub fn security_events(&self) -> Vec<String> {
        self.lock_events().iter().cloned().collect()
    }

    fn lock_events(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_kinds(&self) -> std::sync::MutexGuard<'_, Vec<EventKind>> {
        self.critical_kinds
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceObserver for SecurityObserver {
    fn on_event(&self, device: &dyn Device, event: &EventKind, message: &str) {
        if !self.is_enabled() {
            return;
        }

        let stamp = now().format("%Y-%m-%d %H:%M:%S");
        let entry = format!("{stamp} - {} - {event} - {message}", device.name());
        {
            let mut events = self.lock_events();
            events.push_back(entry.clone());
            if events.len() > SECURITY_LOG_CAPACITY {
                events.pop_front();
            }
        }

        if self.is_critical(event) {
            tracing::warn!(device = device.name(), event = %event, "critical security event");
            let escalation = format!("Critical security event detected: {event} - {message}");
            self.sink
                .broadcast(device, &EventKind::CriticalSecurityAlert, &escalation);
        }
    }
}
