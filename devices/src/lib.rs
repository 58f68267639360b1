//! Plug-in I/O devices for the Z80 system.
//!
//! A device answers on one port of the 256-address I/O space and talks
//! back to the CPU only through the shared interrupt line. This crate
//! provides the TOML definition loader, the static registry of device
//! kinds, the raw program-image loader, and the built-in devices.

pub mod console;
pub mod keyboard;
pub mod latch;
pub mod manifest;
pub mod program;
pub mod pulse;
pub mod registry;

pub use console::Console;
pub use keyboard::Keyboard;
pub use latch::Latch;
pub use manifest::{DeviceDef, DeviceError, load_directory};
pub use program::{ProgramError, load_program};
pub use pulse::Pulse;
