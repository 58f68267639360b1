pub mod state;
pub use state::Z80State;

pub mod z80;
pub use z80::Z80;
