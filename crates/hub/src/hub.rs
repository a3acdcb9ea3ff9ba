//! The hub — assembles registries and the notification service, routes
//! commands, renders the status report.

use std::fmt::Write as _;
use std::sync::Arc;

use domohub_core::{Device, NotificationSink};

use crate::notify::NotificationService;
use crate::registry::DeviceRegistry;
use crate::users::{User, UserDirectory};

/// Explicitly constructed context object owning the device registry, the
/// user directory, and the notification service. Devices receive the
/// hub's sink at construction time; the engine never reaches into any
/// global state.
pub struct HomeHub {
    devices: DeviceRegistry,
    users: Arc<UserDirectory>,
    notifier: Arc<NotificationService>,
}

impl HomeHub {
    #[must_use]
    pub fn new() -> Self {
        let users = Arc::new(UserDirectory::default());
        let notifier = Arc::new(NotificationService::new(users.clone()));
        Self {
            devices: DeviceRegistry::new(),
            users,
            notifier,
        }
    }

    /// The sink to hand to devices at construction time.
    #[must_use]
    pub fn notification_sink(&self) -> Arc<dyn NotificationSink> {
        self.notifier.clone()
    }

    /// Register a device (or decorator chain) under a room.
    pub fn register_device(&mut self, device: Box<dyn Device>, room: impl Into<String>) {
        self.devices.register(device, room);
    }

    /// Remove the first device with the given name, returning it.
    pub fn remove_device(&mut self, name: &str) -> Option<Box<dyn Device>> {
        self.devices.remove_by_name(name)
    }

    pub fn register_user(&self, user: Arc<User>) {
        self.users.register(user);
    }

    pub fn remove_user(&self, user: &Arc<User>) {
        self.users.remove(user);
    }

    #[must_use]
    pub fn registry(&self) -> &DeviceRegistry {
        &self.devices
    }

    pub fn registry_mut(&mut self) -> &mut DeviceRegistry {
        &mut self.devices
    }

    /// Route an action to a device by name. Unknown targets are reported
    /// and ignored; returns whether a device was found.
    pub fn send_command(&mut self, target: &str, action: &str, params: &[String]) -> bool {
        match self.devices.find_by_name_mut(target) {
            Some(device) => {
                tracing::info!(device = target, action, "routing command");
                device.execute_action(action, params);
                true
            }
            None => {
                tracing::warn!(device = target, "target device not found");
                false
            }
        }
    }

    /// Render every room and device status into a report.
    #[must_use]
    pub fn status_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "===== SMART HOME STATUS REPORT =====");
        for room in self.devices.rooms() {
            let _ = writeln!(report, "\nRoom: {room}");
            let _ = writeln!(report, "-------------------------");
            for device in self.devices.devices_in_room(room) {
                let _ = writeln!(report, "Device: {}", device.name());
                let _ = write!(report, "{}", device.status());
            }
        }
        let _ = writeln!(report, "====================================");
        report
    }
}

impl Default for HomeHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use domohub_core::devices::Light;

    use super::*;

    fn hub_with_light(name: &str) -> HomeHub {
        let mut hub = HomeHub::new();
        let light = Light::new(name, hub.notification_sink());
        hub.register_device(Box::new(light), "Living Room");
        hub
    }

    #[test]
    fn should_route_command_to_named_device() {
        let mut hub = hub_with_light("Living Room Light");
        let routed = hub.send_command(
            "Living Room Light",
            "DIM",
            &["55".to_string()],
        );
        assert!(routed);
        let device = hub.registry().find_by_name("Living Room Light").unwrap();
        assert_eq!(device.status().attribute("brightness"), Some("55"));
    }

    #[test]
    fn should_report_unknown_target_without_error() {
        let mut hub = hub_with_light("Living Room Light");
        let routed = hub.send_command("Garage Light", "DIM", &["10".to_string()]);
        assert!(!routed);
    }

    #[test]
    fn should_render_rooms_and_devices_in_report() {
        let hub = hub_with_light("Living Room Light");
        let report = hub.status_report();
        assert!(report.contains("Room: Living Room"));
        assert!(report.contains("Device: Living Room Light"));
        assert!(report.contains("Status: OFF"));
        assert!(report.contains("brightness: 100"));
    }

    #[test]
    fn should_register_and_remove_users() {
        let hub = HomeHub::new();
        let alice = User::new("Alice", "alice@home.com");
        hub.register_user(alice.clone());
        hub.remove_user(&alice);
    }

    #[test]
    fn should_return_removed_device_ownership() {
        let mut hub = hub_with_light("Living Room Light");
        let removed = hub.remove_device("Living Room Light");
        assert!(removed.is_some());
        assert!(hub.registry().is_empty());
    }
}
