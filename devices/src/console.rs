//! Byte sink to standard output.

use std::io::Write;

use zet80_core::core::{Device, IntLine};

use crate::manifest::{DeviceDef, DeviceError};
use crate::registry::DeviceEntry;

/// Write-only output port. Every byte the CPU writes goes straight to
/// the writer and is flushed, so program output appears as it happens.
/// Reads float high.
pub struct Console {
    port: u8,
    out: Box<dyn Write + Send>,
}

impl Console {
    pub fn new(port: u8) -> Self {
        Self::with_writer(port, Box::new(std::io::stdout()))
    }

    /// Create a console draining into any writer (for testing).
    pub fn with_writer(port: u8, out: Box<dyn Write + Send>) -> Self {
        Self { port, out }
    }
}

impl Device for Console {
    fn address(&self) -> u8 {
        self.port
    }

    fn read(&mut self) -> u8 {
        0xFF
    }

    fn write(&mut self, data: u8) {
        // The port has no error path; a failed write drops the byte.
        let _ = self.out.write_all(&[data]);
        let _ = self.out.flush();
    }
}

// ---------------------------------------------------------------------------
// Device registry
// ---------------------------------------------------------------------------

fn create(def: &DeviceDef, _line: IntLine) -> Result<Box<dyn Device>, DeviceError> {
    Ok(Box::new(Console::new(def.port)))
}

inventory::submit! {
    DeviceEntry::new("console", create)
}
