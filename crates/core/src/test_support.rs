//! Shared fixtures for the crate's unit tests.

use std::sync::{Arc, Mutex};

use domohub_domain::event::EventKind;

use crate::device::{Device, DeviceObserver, NotificationSink, SharedObserver};

/// Records every delivered event as `(device name, kind, message)`.
#[derive(Default)]
pub(crate) struct RecordingObserver {
    events: Mutex<Vec<(String, EventKind, String)>>,
}

impl RecordingObserver {
    pub(crate) fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn events(&self) -> Vec<(String, EventKind, String)> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn events_of_kind(&self, kind: &EventKind) -> usize {
        self.events()
            .iter()
            .filter(|(_, event, _)| event == kind)
            .count()
    }
}

impl DeviceObserver for RecordingObserver {
    fn on_event(&self, device: &dyn Device, event: &EventKind, message: &str) {
        self.events.lock().unwrap().push((
            device.name().to_string(),
            event.clone(),
            message.to_string(),
        ));
    }
}

/// Pushes its tag into a shared journal, for delivery-order assertions.
pub(crate) struct TaggedObserver {
    tag: &'static str,
    journal: Arc<Mutex<Vec<&'static str>>>,
}

impl TaggedObserver {
    pub(crate) fn shared(
        tag: &'static str,
        journal: &Arc<Mutex<Vec<&'static str>>>,
    ) -> SharedObserver {
        Arc::new(Self {
            tag,
            journal: journal.clone(),
        })
    }
}

impl DeviceObserver for TaggedObserver {
    fn on_event(&self, _device: &dyn Device, _event: &EventKind, _message: &str) {
        self.journal.lock().unwrap().push(self.tag);
    }
}

/// Always panics, to exercise per-listener failure isolation.
pub(crate) struct PanickyObserver;

impl DeviceObserver for PanickyObserver {
    fn on_event(&self, _device: &dyn Device, _event: &EventKind, _message: &str) {
        panic!("observer failure");
    }
}

/// Captures everything broadcast to the process-wide sink.
#[derive(Default)]
pub(crate) struct RecordingSink {
    events: Mutex<Vec<(String, EventKind, String)>>,
}

impl RecordingSink {
    pub(crate) fn events(&self) -> Vec<(String, EventKind, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn broadcast(&self, device: &dyn Device, event: &EventKind, message: &str) {
        self.events.lock().unwrap().push((
            device.name().to_string(),
            event.clone(),
            message.to_string(),
        ));
    }
}
