pub mod core;
pub mod cpu;

pub mod prelude {
    pub use crate::core::bus::{Bus, IntLine, InterruptState};
    pub use crate::core::mem::Memory;
    pub use crate::core::port::{Device, PortBus};
    pub use crate::core::system::{RunExit, System, SystemBus};
    pub use crate::cpu::z80::{StepError, StepEvent, Z80};
}
