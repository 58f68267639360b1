//! Single-byte store.

use zet80_core::core::{Device, IntLine};

use crate::manifest::{DeviceDef, DeviceError};
use crate::registry::DeviceEntry;

/// Read-back register: holds the last byte written, starting from a
/// configured value. Reads return it unchanged.
pub struct Latch {
    port: u8,
    value: u8,
}

impl Latch {
    pub fn new(port: u8, value: u8) -> Self {
        Self { port, value }
    }
}

impl Device for Latch {
    fn address(&self) -> u8 {
        self.port
    }

    fn read(&mut self) -> u8 {
        self.value
    }

    fn write(&mut self, data: u8) {
        self.value = data;
    }
}

// ---------------------------------------------------------------------------
// Device registry
// ---------------------------------------------------------------------------

fn create(def: &DeviceDef, _line: IntLine) -> Result<Box<dyn Device>, DeviceError> {
    Ok(Box::new(Latch::new(def.port, def.value.unwrap_or(0x00))))
}

inventory::submit! {
    DeviceEntry::new("latch", create)
}
