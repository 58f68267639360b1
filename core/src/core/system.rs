use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::bus::{Bus, InterruptState};
use crate::core::mem::Memory;
use crate::core::port::PortBus;
use crate::cpu::z80::{StepError, StepEvent, Z80};

/// Memory plus port map, viewed by the CPU as one bus.
pub struct SystemBus {
    pub mem: Memory,
    pub ports: PortBus,
}

impl SystemBus {
    pub fn new() -> Self {
        Self {
            mem: Memory::new(),
            ports: PortBus::new(),
        }
    }
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SystemBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.mem.read(addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.mem.write(addr, data);
    }

    fn io_read(&mut self, port: u8) -> u8 {
        self.ports.read(port)
    }

    fn io_write(&mut self, port: u8, data: u8) {
        self.ports.write(port, data);
    }

    fn check_interrupts(&mut self) -> InterruptState {
        self.ports.interrupts()
    }

    fn ack_irq(&mut self) {
        self.ports.ack_irq();
    }
}

/// Why `run` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunExit {
    /// HALT latched with interrupts disabled and nothing pending; the
    /// program cannot make further progress.
    Halted,
    /// The stop handle was raised between instructions.
    Stopped,
}

/// Handle for requesting a stop from another thread. Observed at the
/// next instruction boundary.
#[derive(Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// A complete machine: one Z80 against a flat 64 KiB RAM and the port
/// map. Owns the run loop and its exit conditions.
pub struct System {
    pub cpu: Z80,
    pub bus: SystemBus,
    stop: Arc<AtomicBool>,
}

impl System {
    pub fn new() -> Self {
        Self {
            cpu: Z80::new(),
            bus: SystemBus::new(),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(self.stop.clone())
    }

    /// One instruction (or one interrupt acceptance, or one halted NOP).
    pub fn step(&mut self) -> Result<StepEvent, StepError> {
        self.cpu.step(&mut self.bus)
    }

    /// The exit condition, if one holds right now. Checked between
    /// instructions; a halted CPU with IFF1 set keeps idling because a
    /// device interrupt can still wake it.
    pub fn exit_ready(&self) -> Option<RunExit> {
        if self.stop.load(Ordering::SeqCst) {
            return Some(RunExit::Stopped);
        }
        if self.cpu.halted && !self.cpu.iff1 && !self.bus.ports.irq_pending() {
            return Some(RunExit::Halted);
        }
        None
    }

    /// Run until an exit condition holds or an instruction faults.
    pub fn run(&mut self) -> Result<RunExit, StepError> {
        loop {
            if let Some(exit) = self.exit_ready() {
                return Ok(exit);
            }
            self.step()?;
        }
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
