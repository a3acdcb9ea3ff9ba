//! # domohub-domain
//!
//! Pure domain model for the domohub device simulation.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **`DeviceStatus`** (on/off flag plus named string attributes)
//! - Define **`EventKind`** (the vocabulary of device events)
//! - Define **`TimeWindow`** (daily on/off schedule with overnight wraparound)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `core`, `hub`, or external IO crates.

pub mod error;
pub mod event;
pub mod id;
pub mod status;
pub mod time;
