//! # domohub-hub
//!
//! Boundary collaborators around the device engine.
//!
//! ## Responsibilities
//! - **`DeviceRegistry`** — devices grouped by room, lookup by name
//! - **`User`** / **`UserDirectory`** — system-wide notification recipients
//! - **`NotificationService`** — the engine's
//!   [`NotificationSink`](domohub_core::NotificationSink), fanning every
//!   broadcast out to registered users
//! - **`HomeHub`** — assembles the above, routes commands, renders the
//!   status report
//!
//! ## Dependency rule
//! No global state: the hub is constructed explicitly and hands its
//! notification sink to devices at construction time.

pub mod hub;
pub mod notify;
pub mod registry;
pub mod users;

pub use hub::HomeHub;
pub use notify::NotificationService;
pub use registry::DeviceRegistry;
pub use users::{User, UserDirectory};
