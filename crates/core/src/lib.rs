//! # domohub-core
//!
//! The device composition and event-notification engine.
//!
//! ## Responsibilities
//! - Define the **`Device`** capability trait and the shared `DeviceCore`
//!   plumbing (power state, status, observers, strategy slot)
//! - Concrete devices: `Light`, `Fan`, `AirConditioner`, `Camera`
//! - Sensor **decorators** that wrap any device and overlay their own
//!   attributes: `TemperatureSensor`, `HumiditySensor`, `MotionSensor`
//! - **Observer** fan-out with per-listener failure isolation, plus the
//!   `LoggingObserver` and `SecurityObserver` implementations
//! - Swappable **control strategies**: `ManualControl`, `ScheduledControl`,
//!   `TemperatureBasedControl`
//!
//! ## Dependency rule
//! Depends on `domohub-domain` only. The process-wide notification fan-out
//! is expressed as the [`NotificationSink`](device::NotificationSink) port;
//! the `hub` crate provides the real implementation.

pub mod decorators;
pub mod device;
pub mod devices;
pub mod observers;
mod rng;
pub mod strategies;

pub use device::{Device, DeviceObserver, NotificationSink, NullSink, SharedObserver};
pub use devices::CameraControls;
pub use rng::SensorRng;

#[cfg(test)]
pub(crate) mod test_support;
