//! Device-local observers: event logging and security monitoring.
//!
//! Observers are shared handles (`Arc`) and may be attached to any number
//! of devices, so their state lives behind locks.

pub mod logging;
pub mod security;

pub use logging::LoggingObserver;
pub use security::SecurityObserver;
