//! Device status — an on/off flag plus an open mapping of named attributes.
//!
//! The status is owned by the device (or decorator) that produces it;
//! callers always receive a copy-on-read snapshot. Attributes are stored
//! in a `BTreeMap` so iteration and rendering are deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of a device's observable state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStatus {
    is_on: bool,
    attributes: BTreeMap<String, String>,
}

impl DeviceStatus {
    /// Create a status with the given power flag and no attributes.
    #[must_use]
    pub fn new(is_on: bool) -> Self {
        Self {
            is_on,
            attributes: BTreeMap::new(),
        }
    }

    /// Whether the device is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Set the power flag.
    pub fn set_on(&mut self, is_on: bool) {
        self.is_on = is_on;
    }

    /// Insert or overwrite an attribute. No validation on key or value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Look up an attribute. Absent key means absent value, never an
    /// empty-string placeholder.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Defensive copy of all attributes; mutating it never affects the
    /// live status.
    #[must_use]
    pub fn snapshot_attributes(&self) -> BTreeMap<String, String> {
        self.attributes.clone()
    }

}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Status: {}", if self.is_on { "ON" } else { "OFF" })?;
        if !self.attributes.is_empty() {
            writeln!(f, "Attributes:")?;
            for (key, value) in &self.attributes {
                writeln!(f, "  {key}: {value}")?;
            }
        }
        Ok(())
    }
}
