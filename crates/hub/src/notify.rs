//! Notification service — the engine's process-wide sink.

use std::sync::Arc;

use domohub_core::{Device, DeviceObserver, NotificationSink};
use domohub_domain::event::EventKind;

use crate::users::UserDirectory;

/// Implements [`NotificationSink`] by logging the broadcast and
/// forwarding it to every registered user, in registration order.
pub struct NotificationService {
    directory: Arc<UserDirectory>,
}

impl NotificationService {
    /// Build a service over a shared user directory.
    #[must_use]
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self { directory }
    }
}

impl NotificationSink for NotificationService {
    fn broadcast(&self, device: &dyn Device, event: &EventKind, message: &str) {
        tracing::info!(device = device.name(), event = %event, "{message}");
        for user in self.directory.users() {
            user.on_event(device, event, message);
        }
    }
}
