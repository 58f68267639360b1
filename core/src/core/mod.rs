pub mod bus;
pub mod mem;
pub mod port;
pub mod system;

pub use bus::{Bus, IntLine, InterruptState};
pub use mem::{Memory, MemoryError};
pub use port::{Device, PortBus, PortError};
pub use system::{RunExit, System, SystemBus};
