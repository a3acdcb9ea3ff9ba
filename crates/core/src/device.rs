//! The `Device` capability trait and the shared plumbing every concrete
//! device embeds.
//!
//! A device is polymorphic over identity, power control, action execution,
//! observer management, and status snapshots. Decorators implement the same
//! trait by forwarding to an owned inner device, so chains of arbitrary
//! depth compose without any base-type coupling.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use domohub_domain::event::EventKind;
use domohub_domain::id::DeviceId;
use domohub_domain::status::DeviceStatus;

use crate::devices::camera::CameraControls;
use crate::strategies::{ControlStrategy, ManualControl};

/// A listener notified synchronously on every device event.
///
/// One instance may be attached to many devices and must therefore use
/// interior mutability for its own state. Implementations should not
/// panic; a panicking observer is isolated and reported, and delivery
/// continues to the remaining listeners.
pub trait DeviceObserver: Send + Sync {
    /// Called with the originating device, the event kind, and a
    /// human-readable message.
    fn on_event(&self, device: &dyn Device, event: &EventKind, message: &str);
}

/// Shared handle to an observer. Deduplication is by pointer identity.
pub type SharedObserver = Arc<dyn DeviceObserver>;

/// Process-wide notification port. Every device event is forwarded here
/// after the device-local observers have run; the hub implements this by
/// fanning out to registered users.
pub trait NotificationSink: Send + Sync {
    /// Deliver an event to system-wide subscribers. Must not panic.
    fn broadcast(&self, device: &dyn Device, event: &EventKind, message: &str);
}

/// A sink that discards everything, for standalone devices and tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn broadcast(&self, _device: &dyn Device, _event: &EventKind, _message: &str) {}
}

/// Capability surface shared by concrete devices and decorators.
pub trait Device {
    /// Stable identifier, unique per device instance.
    fn id(&self) -> DeviceId;

    /// Display name. Used by collaborators for routing; not guaranteed
    /// unique across devices.
    fn name(&self) -> &str;

    /// Transition to ON. No-op (and no event) when already on.
    fn turn_on(&mut self);

    /// Transition to OFF. No-op (and no event) when already off.
    fn turn_off(&mut self);

    /// Current power state.
    fn is_on(&self) -> bool;

    /// Execute a named action. Unrecognized actions fall through the
    /// decorator chain down to the base device's control strategy;
    /// malformed parameters are reported and ignored.
    fn execute_action(&mut self, action: &str, params: &[String]);

    /// Subscribe a listener. Duplicates (by pointer identity) are ignored;
    /// registration order is preserved.
    fn add_observer(&mut self, observer: SharedObserver);

    /// Unsubscribe a listener by pointer identity.
    fn remove_observer(&mut self, observer: &SharedObserver);

    /// Deliver an event to every registered observer in registration
    /// order, then to the process-wide notification sink.
    fn notify_observers(&self, event: &EventKind, message: &str);

    /// Copy-on-read snapshot of the device status. Decorators overlay
    /// their own attributes on the inner snapshot; outer values win.
    fn status(&self) -> DeviceStatus;

    /// Capability query: camera mode control, when this device (or the
    /// innermost device of a decorator chain) is a camera.
    fn camera_controls(&mut self) -> Option<&mut dyn CameraControls> {
        None
    }
}

/// State and plumbing embedded by every concrete device: identity, power
/// flag, attribute-bearing status, observer list, strategy slot, and the
/// injected notification sink.
pub struct DeviceCore {
    id: DeviceId,
    name: String,
    is_on: bool,
    status: DeviceStatus,
    observers: Vec<SharedObserver>,
    strategy: Box<dyn ControlStrategy>,
    sink: Arc<dyn NotificationSink>,
}

impl DeviceCore {
    /// Build the core for a device that starts OFF, with the manual
    /// control strategy installed.
    pub fn new(name: impl Into<String>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            id: DeviceId::new(),
            name: name.into(),
            is_on: false,
            status: DeviceStatus::new(false),
            observers: Vec::new(),
            strategy: Box::new(ManualControl),
            sink,
        }
    }

    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    #[must_use]
    pub fn status(&self) -> &DeviceStatus {
        &self.status
    }

    /// Mutable access for devices maintaining their typed attributes.
    pub fn status_mut(&mut self) -> &mut DeviceStatus {
        &mut self.status
    }

    /// Flip the power flag. Returns `true` only when the state actually
    /// changed, so callers emit `STATE_CHANGED` exactly once per
    /// transition.
    pub fn set_power(&mut self, on: bool) -> bool {
        if self.is_on == on {
            return false;
        }
        self.is_on = on;
        self.status.set_on(on);
        true
    }

    /// Subscribe a listener, ignoring duplicates by pointer identity.
    pub fn add_observer(&mut self, observer: SharedObserver) {
        if !self
            .observers
            .iter()
            .any(|existing| Arc::ptr_eq(existing, &observer))
        {
            self.observers.push(observer);
        }
    }

    /// Unsubscribe a listener by pointer identity.
    pub fn remove_observer(&mut self, observer: &SharedObserver) {
        self.observers
            .retain(|existing| !Arc::ptr_eq(existing, observer));
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Fan an event out to every observer in registration order, then to
    /// the notification sink. A panicking observer is reported and skipped
    /// so it cannot block delivery to the listeners after it.
    pub fn notify(&self, source: &dyn Device, event: &EventKind, message: &str) {
        for observer in &self.observers {
            let delivery =
                catch_unwind(AssertUnwindSafe(|| observer.on_event(source, event, message)));
            if delivery.is_err() {
                tracing::error!(
                    device = source.name(),
                    event = %event,
                    "observer panicked during event delivery"
                );
            }
        }
        self.sink.broadcast(source, event, message);
    }

    /// Replace the active control strategy, dropping the previous one.
    pub fn set_strategy(&mut self, strategy: Box<dyn ControlStrategy>) {
        self.strategy = strategy;
    }

    /// Swap the strategy slot, returning the previous occupant. Used by
    /// the dispatch path to lend the active policy out while keeping the
    /// slot occupied.
    pub fn swap_strategy(&mut self, strategy: Box<dyn ControlStrategy>) -> Box<dyn ControlStrategy> {
        std::mem::replace(&mut self.strategy, strategy)
    }

    /// Human-readable name of the active strategy.
    #[must_use]
    pub fn strategy_name(&self) -> String {
        self.strategy.name()
    }
}

impl std::fmt::Debug for DeviceCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceCore")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("is_on", &self.is_on)
            .field("observers", &self.observers.len())
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::devices::Light;
    use crate::test_support::{PanickyObserver, RecordingObserver, RecordingSink, TaggedObserver};

    fn light() -> Light {
        Light::new("Desk Light", Arc::new(NullSink))
    }

    #[test]
    fn should_start_off_with_manual_strategy() {
        let core = DeviceCore::new("Probe", Arc::new(NullSink));
        assert!(!core.is_on());
        assert!(!core.status().is_on());
        assert_eq!(core.strategy_name(), "Manual Control");
    }

    #[test]
    fn should_report_power_change_only_on_transition() {
        let mut core = DeviceCore::new("Probe", Arc::new(NullSink));
        assert!(core.set_power(true));
        assert!(!core.set_power(true));
        assert!(core.set_power(false));
        assert!(!core.set_power(false));
    }

    #[test]
    fn should_keep_status_flag_in_sync_with_power() {
        let mut core = DeviceCore::new("Probe", Arc::new(NullSink));
        core.set_power(true);
        assert!(core.status().is_on());
        core.set_power(false);
        assert!(!core.status().is_on());
    }

    #[test]
    fn should_track_observer_registration_by_identity() {
        let mut core = DeviceCore::new("Probe", Arc::new(NullSink));
        let observer: SharedObserver = RecordingObserver::shared();
        core.add_observer(observer.clone());
        core.add_observer(observer.clone());
        assert_eq!(core.observer_count(), 1);
        core.remove_observer(&observer);
        assert_eq!(core.observer_count(), 0);
    }

    #[test]
    fn should_ignore_duplicate_observer_registration() {
        let mut device = light();
        let observer = RecordingObserver::shared();
        device.add_observer(observer.clone());
        device.add_observer(observer.clone());
        device.turn_on();
        assert_eq!(observer.events().len(), 1);
    }

    #[test]
    fn should_stop_notifying_removed_observer() {
        let mut device = light();
        let observer = RecordingObserver::shared();
        let handle: SharedObserver = observer.clone();
        device.add_observer(handle.clone());
        device.turn_on();
        device.remove_observer(&handle);
        device.turn_off();
        assert_eq!(observer.events().len(), 1);
    }

    #[test]
    fn should_notify_observers_in_registration_order() {
        let mut device = light();
        let journal = Arc::new(Mutex::new(Vec::new()));
        device.add_observer(TaggedObserver::shared("first", &journal));
        device.add_observer(TaggedObserver::shared("second", &journal));

        device.turn_on();
        assert_eq!(journal.lock().unwrap().as_slice(), ["first", "second"]);
    }

    #[test]
    fn should_isolate_panicking_observer_and_continue_delivery() {
        let mut device = light();
        let survivor = RecordingObserver::shared();
        device.add_observer(Arc::new(PanickyObserver));
        device.add_observer(survivor.clone());

        device.turn_on();
        assert_eq!(survivor.events().len(), 1);
    }

    #[test]
    fn should_forward_events_to_sink_after_observers() {
        let sink = Arc::new(RecordingSink::default());
        let mut device = Light::new("Desk Light", sink.clone());
        device.turn_on();

        let broadcasts = sink.events();
        assert_eq!(broadcasts.len(), 1);
        assert_eq!(broadcasts[0].0, "Desk Light");
        assert_eq!(broadcasts[0].1, EventKind::StateChanged);
    }

    #[test]
    fn should_reach_sink_even_when_an_observer_panics() {
        let sink = Arc::new(RecordingSink::default());
        let mut device = Light::new("Desk Light", sink.clone());
        device.add_observer(Arc::new(PanickyObserver));
        device.turn_on();
        assert_eq!(sink.events().len(), 1);
    }
}
