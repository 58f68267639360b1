use std::fmt;

pub const MEMORY_SIZE: usize = 0x10000;

/// 64 KiB flat byte store. Single-byte access is total over the u16
/// address space; the word and bulk forms are range-checked because
/// addr+1 (or start+len) can cross the top of memory.
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// A computed address fell outside [0x0000, 0xFFFF].
    OutOfRange { start: u16, len: usize },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::OutOfRange { start, len } => write!(
                f,
                "region {:#06X}+{} exceeds the 64 KiB address space",
                start, len
            ),
        }
    }
}

impl std::error::Error for MemoryError {}

impl Memory {
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; MEMORY_SIZE]),
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    pub fn write(&mut self, addr: u16, data: u8) {
        self.bytes[addr as usize] = data;
    }

    /// Little-endian word read: low byte at addr, high byte at addr+1.
    pub fn read_word(&self, addr: u16) -> Result<u16, MemoryError> {
        if addr == u16::MAX {
            return Err(MemoryError::OutOfRange {
                start: addr,
                len: 2,
            });
        }
        let lo = self.bytes[addr as usize] as u16;
        let hi = self.bytes[addr as usize + 1] as u16;
        Ok((hi << 8) | lo)
    }

    /// Little-endian word write: low byte at addr, high byte at addr+1.
    pub fn write_word(&mut self, addr: u16, word: u16) -> Result<(), MemoryError> {
        if addr == u16::MAX {
            return Err(MemoryError::OutOfRange {
                start: addr,
                len: 2,
            });
        }
        self.bytes[addr as usize] = word as u8;
        self.bytes[addr as usize + 1] = (word >> 8) as u8;
        Ok(())
    }

    /// Bulk load at increasing addresses. A block that would cross 0xFFFF
    /// is rejected whole; nothing is written.
    pub fn load(&mut self, start: u16, data: &[u8]) -> Result<(), MemoryError> {
        let end = start as usize + data.len();
        if end > MEMORY_SIZE {
            return Err(MemoryError::OutOfRange {
                start,
                len: data.len(),
            });
        }
        self.bytes[start as usize..end].copy_from_slice(data);
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
