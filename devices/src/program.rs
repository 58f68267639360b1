//! Raw program images.
//!
//! A program file is a bare byte sequence, no header and no relocation.
//! It is copied verbatim into memory at the requested start address.

use std::path::Path;

use zet80_core::core::Memory;

/// Errors from loading a program image.
#[derive(Debug)]
pub enum ProgramError {
    /// Underlying I/O error (file not found, permission denied, etc.)
    Io(std::io::Error),

    /// Image does not fit between the load address and the top of memory.
    TooLarge { address: u16, len: usize },
}

impl std::fmt::Display for ProgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TooLarge { address, len } => write!(
                f,
                "{len} byte program does not fit at {address:#06X}"
            ),
        }
    }
}

impl std::error::Error for ProgramError {}

impl From<std::io::Error> for ProgramError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Read `path` and copy its bytes into `memory` starting at `address`.
/// An image that would run past 0xFFFF is rejected whole. Returns the
/// image length.
pub fn load_program(memory: &mut Memory, path: &Path, address: u16) -> Result<usize, ProgramError> {
    let image = std::fs::read(path)?;
    memory
        .load(address, &image)
        .map_err(|_| ProgramError::TooLarge {
            address,
            len: image.len(),
        })?;
    Ok(image.len())
}
