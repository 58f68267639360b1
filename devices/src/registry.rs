//! Device kind registry for definition-file discovery.
//!
//! Each built-in device kind self-registers via [`inventory::submit!`]
//! with a [`DeviceEntry`] containing its definition-file `kind` key and a
//! factory function. The launcher resolves definitions at startup without
//! any central list.

use zet80_core::core::{Device, IntLine};

use crate::manifest::{DeviceDef, DeviceError};

/// Describes one constructible device kind.
pub struct DeviceEntry {
    /// `kind` key used in definition files (e.g., "pulse").
    pub kind: &'static str,
    /// Factory: construct a device from its definition and the shared
    /// interrupt line.
    pub create: fn(&DeviceDef, IntLine) -> Result<Box<dyn Device>, DeviceError>,
}

impl DeviceEntry {
    pub const fn new(
        kind: &'static str,
        create: fn(&DeviceDef, IntLine) -> Result<Box<dyn Device>, DeviceError>,
    ) -> Self {
        Self { kind, create }
    }
}

inventory::collect!(DeviceEntry);

/// Return all registered device kinds, sorted by kind.
pub fn all() -> Vec<&'static DeviceEntry> {
    let mut entries: Vec<_> = inventory::iter::<DeviceEntry>.into_iter().collect();
    entries.sort_by_key(|e| e.kind);
    entries
}

/// Look up a device kind by its definition-file key.
pub fn find(kind: &str) -> Option<&'static DeviceEntry> {
    inventory::iter::<DeviceEntry>
        .into_iter()
        .find(|e| e.kind == kind)
}
