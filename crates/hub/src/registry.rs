//! Device registry — devices grouped by room, lookup by name.

use domohub_core::Device;

struct RegisteredDevice {
    room: String,
    device: Box<dyn Device>,
}

/// Owns every registered device (or decorator chain) for its lifetime.
///
/// Display names are not guaranteed unique. Name lookups resolve to the
/// **first registered** match; later devices with the same name are
/// reachable only through iteration.
#[derive(Default)]
pub struct DeviceRegistry {
    devices: Vec<RegisteredDevice>,
}

impl DeviceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device under a room. The registry takes ownership of
    /// the whole decorator chain.
    pub fn register(&mut self, device: Box<dyn Device>, room: impl Into<String>) {
        let room = room.into();
        tracing::info!(device = device.name(), room = room.as_str(), "device registered");
        self.devices.push(RegisteredDevice { room, device });
    }

    /// Remove the first device with the given name, returning it.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Box<dyn Device>> {
        let index = self
            .devices
            .iter()
            .position(|entry| entry.device.name() == name)?;
        let entry = self.devices.remove(index);
        tracing::info!(device = name, "device removed");
        Some(entry.device)
    }

    /// First registered device with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&dyn Device> {
        self.devices
            .iter()
            .find(|entry| entry.device.name() == name)
            .map(|entry| entry.device.as_ref())
    }

    /// Mutable access to the first registered device with the given name.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut (dyn Device + 'static)> {
        self.devices
            .iter_mut()
            .find(|entry| entry.device.name() == name)
            .map(|entry| entry.device.as_mut())
    }

    /// All devices with their rooms, in registration order.
    pub fn devices(&self) -> impl Iterator<Item = (&str, &dyn Device)> {
        self.devices
            .iter()
            .map(|entry| (entry.room.as_str(), entry.device.as_ref()))
    }

    /// Mutable iteration over all devices, in registration order.
    pub fn devices_mut(&mut self) -> impl Iterator<Item = &mut (dyn Device + 'static)> + '_ {
        self.devices.iter_mut().map(|entry| entry.device.as_mut())
    }

    /// Rooms in first-seen order, without duplicates.
    #[must_use]
    pub fn rooms(&self) -> Vec<&str> {
        let mut rooms: Vec<&str> = Vec::new();
        for entry in &self.devices {
            if !rooms.contains(&entry.room.as_str()) {
                rooms.push(entry.room.as_str());
            }
        }
        rooms
    }

    /// Devices registered under the given room, in registration order.
    pub fn devices_in_room<'a>(&'a self, room: &'a str) -> impl Iterator<Item = &'a dyn Device> {
        self.devices
            .iter()
            .filter(move |entry| entry.room == room)
            .map(|entry| entry.device.as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
