//! Concrete devices: light, fan, air conditioner, camera.
//!
//! Every device embeds a [`DeviceCore`](crate::device::DeviceCore) for the
//! shared plumbing and hand-writes only its own action vocabulary. Action
//! dispatch is subtype-specific handler first, strategy fallback second.

pub mod air_conditioner;
pub mod camera;
pub mod fan;
pub mod light;

pub use air_conditioner::{AcMode, AirConditioner};
pub use camera::{Camera, CameraControls, CameraMode};
pub use fan::Fan;
pub use light::Light;

/// Expands, inside an `impl Device` block, to the trait methods every
/// concrete device implements identically by delegating to its embedded
/// `core` field. `execute_action` and capability overrides stay
/// hand-written.
macro_rules! device_plumbing {
    () => {
        fn id(&self) -> domohub_domain::id::DeviceId {
            self.core.id()
        }

        fn name(&self) -> &str {
            self.core.name()
        }

        fn turn_on(&mut self) {
            if self.core.set_power(true) {
                self.core.notify(
                    self,
                    &domohub_domain::event::EventKind::StateChanged,
                    "Device turned ON",
                );
            }
        }

        fn turn_off(&mut self) {
            if self.core.set_power(false) {
                self.core.notify(
                    self,
                    &domohub_domain::event::EventKind::StateChanged,
                    "Device turned OFF",
                );
            }
        }

        fn is_on(&self) -> bool {
            self.core.is_on()
        }

        fn add_observer(&mut self, observer: crate::device::SharedObserver) {
            self.core.add_observer(observer);
        }

        fn remove_observer(&mut self, observer: &crate::device::SharedObserver) {
            self.core.remove_observer(observer);
        }

        fn notify_observers(&self, event: &domohub_domain::event::EventKind, message: &str) {
            self.core.notify(self, event, message);
        }

        fn status(&self) -> domohub_domain::status::DeviceStatus {
            self.core.status().clone()
        }
    };
}
pub(crate) use device_plumbing;

/// Expands to the strategy-hosting inherent methods: public strategy
/// replacement plus the private dispatch path that lends the active
/// policy out against the device. A manual placeholder keeps the slot
/// occupied for the duration, so the device never observably lacks a
/// strategy.
macro_rules! strategy_host {
    ($ty:ty) => {
        impl $ty {
            /// Replace the active control policy; the previous one is
            /// dropped.
            pub fn set_control_strategy(
                &mut self,
                strategy: Box<dyn crate::strategies::ControlStrategy>,
            ) {
                self.core.set_strategy(strategy);
                tracing::info!(
                    device = self.core.name(),
                    strategy = %self.core.strategy_name(),
                    "control strategy changed"
                );
            }

            /// Human-readable name of the active control policy.
            #[must_use]
            pub fn control_strategy_name(&self) -> String {
                self.core.strategy_name()
            }

            fn delegate_to_strategy(&mut self, params: &[String]) {
                let mut strategy = self
                    .core
                    .swap_strategy(Box::new(crate::strategies::ManualControl));
                strategy.control(self, params);
                let _ = self.core.swap_strategy(strategy);
            }
        }
    };
}
pub(crate) use strategy_host;
