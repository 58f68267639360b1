use std::fmt;

use crate::core::bus::{IntLine, InterruptState};

/// Contract every I/O device satisfies. The CPU only ever calls `read`
/// and `write`, and only between `start` and `stop`; everything else a
/// device does (threads, queues) is its own business. The interrupt
/// path back into the CPU is the shared line a device receives at
/// construction, not this trait.
pub trait Device: Send {
    /// The single port this device answers on.
    fn address(&self) -> u8;

    fn start(&mut self) {}

    fn stop(&mut self) {}

    /// Current output byte. Devices with nothing to offer return 0xFF.
    fn read(&mut self) -> u8;

    /// Deliver one byte to the device.
    fn write(&mut self, data: u8);
}

impl fmt::Debug for dyn Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortError {
    /// A device already owns this port.
    AddressInUse { port: u8 },
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortError::AddressInUse { port } => {
                write!(f, "port {:#04X} already has a device attached", port)
            }
        }
    }
}

impl std::error::Error for PortError {}

/// Dense port map: one optional device per 8-bit address. Unmapped
/// ports read as 0xFF and swallow writes, matching a floating bus.
pub struct PortBus {
    slots: [Option<Box<dyn Device>>; 256],
    line: IntLine,
}

impl PortBus {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            line: IntLine::new(),
        }
    }

    /// The shared interrupt line devices raise. Device factories take a
    /// clone of this before `attach`.
    pub fn line(&self) -> IntLine {
        self.line.clone()
    }

    pub fn attach(&mut self, device: Box<dyn Device>) -> Result<(), PortError> {
        let port = device.address();
        let slot = &mut self.slots[port as usize];
        if slot.is_some() {
            return Err(PortError::AddressInUse { port });
        }
        *slot = Some(device);
        Ok(())
    }

    pub fn is_attached(&self, port: u8) -> bool {
        self.slots[port as usize].is_some()
    }

    pub fn read(&mut self, port: u8) -> u8 {
        match &mut self.slots[port as usize] {
            Some(device) => device.read(),
            None => 0xFF,
        }
    }

    pub fn write(&mut self, port: u8, data: u8) {
        if let Some(device) = &mut self.slots[port as usize] {
            device.write(data);
        }
    }

    pub fn start_all(&mut self) {
        for slot in self.slots.iter_mut() {
            if let Some(device) = slot {
                device.start();
            }
        }
    }

    pub fn stop_all(&mut self) {
        for slot in self.slots.iter_mut() {
            if let Some(device) = slot {
                device.stop();
            }
        }
    }

    pub fn interrupts(&self) -> InterruptState {
        self.line.sample()
    }

    pub fn irq_pending(&self) -> bool {
        self.line.pending()
    }

    pub fn ack_irq(&self) {
        self.line.clear_irq();
    }
}

impl Default for PortBus {
    fn default() -> Self {
        Self::new()
    }
}
