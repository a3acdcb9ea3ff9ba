//! Sensor decorators — `Device` wrappers that layer sensing capability
//! onto any inner device.
//!
//! Each decorator exclusively owns the one device directly inside it and
//! forwards every capability it does not handle itself. Two things are
//! never forwarded verbatim: the sensor's own actions, and `status()`,
//! which overlays the sensor's attributes on the inner snapshot so outer
//! values win on key collision. Unrecognized actions travel down the
//! chain until the base device's strategy-delegation path picks them up.

pub mod humidity;
pub mod motion;
pub mod temperature;

pub use humidity::HumiditySensor;
pub use motion::MotionSensor;
pub use temperature::TemperatureSensor;

/// Expands, inside an `impl Device` block, to the trait methods a
/// decorator forwards unchanged to its owned `inner` device. `status`
/// and `execute_action` stay hand-written.
macro_rules! forward_device_plumbing {
    () => {
        fn id(&self) -> domohub_domain::id::DeviceId {
            self.inner.id()
        }

        fn name(&self) -> &str {
            self.inner.name()
        }

        fn turn_on(&mut self) {
            self.inner.turn_on();
        }

        fn turn_off(&mut self) {
            self.inner.turn_off();
        }

        fn is_on(&self) -> bool {
            self.inner.is_on()
        }

        fn add_observer(&mut self, observer: crate::device::SharedObserver) {
            self.inner.add_observer(observer);
        }

        fn remove_observer(&mut self, observer: &crate::device::SharedObserver) {
            self.inner.remove_observer(observer);
        }

        fn notify_observers(&self, event: &domohub_domain::event::EventKind, message: &str) {
            self.inner.notify_observers(event, message);
        }

        fn camera_controls(&mut self) -> Option<&mut dyn crate::devices::CameraControls> {
            self.inner.camera_controls()
        }
    };
}
pub(crate) use forward_device_plumbing;

/// Expands to the detach accessors every decorator exposes: borrow the
/// immediately wrapped device (chain intact) or consume the wrapper.
macro_rules! decorator_accessors {
    () => {
        /// The immediately wrapped device, without altering the chain.
        #[must_use]
        pub fn inner(&self) -> &dyn crate::device::Device {
            self.inner.as_ref()
        }

        /// Mutable access to the immediately wrapped device.
        pub fn inner_mut(&mut self) -> &mut dyn crate::device::Device {
            self.inner.as_mut()
        }

        /// Consume the decorator and return the wrapped device.
        #[must_use]
        pub fn into_inner(self) -> Box<dyn crate::device::Device> {
            self.inner
        }
    };
}
pub(crate) use decorator_accessors;
