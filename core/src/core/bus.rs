use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Bus interface the CPU executes against: 64 KiB memory space plus the
/// separate 256-address I/O port space.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);

    /// Read from I/O port address space. Unmapped ports float high.
    fn io_read(&mut self, port: u8) -> u8 {
        let _ = port;
        0xFF
    }

    /// Write to I/O port address space. Unmapped ports drop the byte.
    fn io_write(&mut self, port: u8, data: u8) {
        let _ = (port, data);
    }

    /// Sample the pending interrupt lines. Called once per instruction
    /// boundary; must not consume anything.
    fn check_interrupts(&mut self) -> InterruptState {
        InterruptState::default()
    }

    /// Consume the maskable latch after the CPU accepts the interrupt.
    fn ack_irq(&mut self) {}
}

#[derive(Clone, Copy, Debug)]
pub struct InterruptState {
    pub nmi: bool,
    pub irq: bool,
    /// Byte the interrupting device drives onto the bus during acceptance:
    /// the instruction for IM 0, the vector for IM 2.
    pub data: u8,
}

impl Default for InterruptState {
    fn default() -> Self {
        Self {
            nmi: false,
            irq: false,
            data: 0xFF,
        }
    }
}

/// Shared interrupt line. Devices hold a clone and raise it from any
/// thread; the CPU samples it between instructions. The maskable latch
/// stays up until acknowledged, the NMI latch is level (the CPU does its
/// own edge detection).
#[derive(Clone)]
pub struct IntLine(Arc<IntLineInner>);

struct IntLineInner {
    irq: AtomicBool,
    nmi: AtomicBool,
    data: AtomicU8,
}

impl Default for IntLine {
    fn default() -> Self {
        Self::new()
    }
}

impl IntLine {
    pub fn new() -> Self {
        Self(Arc::new(IntLineInner {
            irq: AtomicBool::new(false),
            nmi: AtomicBool::new(false),
            data: AtomicU8::new(0xFF),
        }))
    }

    /// Latch a maskable interrupt, driving `data` for IM 0 / IM 2
    /// acceptance. The data byte is stored before the latch is raised so
    /// a sampler that sees the latch also sees the byte.
    pub fn raise_irq(&self, data: u8) {
        self.0.data.store(data, Ordering::SeqCst);
        self.0.irq.store(true, Ordering::SeqCst);
    }

    pub fn clear_irq(&self) {
        self.0.irq.store(false, Ordering::SeqCst);
    }

    pub fn set_nmi(&self, level: bool) {
        self.0.nmi.store(level, Ordering::SeqCst);
    }

    /// True if either latch would deliver an interrupt when sampled.
    pub fn pending(&self) -> bool {
        self.0.irq.load(Ordering::SeqCst) || self.0.nmi.load(Ordering::SeqCst)
    }

    pub fn sample(&self) -> InterruptState {
        InterruptState {
            nmi: self.0.nmi.load(Ordering::SeqCst),
            irq: self.0.irq.load(Ordering::SeqCst),
            data: self.0.data.load(Ordering::SeqCst),
        }
    }
}
