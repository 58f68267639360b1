//! Opcode recognizer: classifies 1-4 bytes into one decoded instruction.
//!
//! The byte source is a caller-supplied closure that yields consecutive
//! bytes and advances its own cursor, so the same classifier serves the
//! CPU (reading through PC) and the disassembler (reading at an
//! arbitrary address).

use std::fmt;

use super::tables::{self, Imm};

/// Prefix class of a decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prefix {
    None,
    Cb,
    Ed,
    Dd,
    Fd,
    DdCb,
    FdCb,
}

/// Immediate operand carried by the instruction, already read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    None,
    Byte(u8),
    Word(u16),
}

impl Operand {
    pub fn byte(self) -> u8 {
        match self {
            Operand::Byte(b) => b,
            _ => unreachable!("byte operand expected"),
        }
    }

    pub fn word(self) -> u16 {
        match self {
            Operand::Word(w) => w,
            _ => unreachable!("word operand expected"),
        }
    }
}

/// One classified instruction. Built by `decode`, consumed immediately
/// by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub prefix: Prefix,
    pub opcode: u8,
    pub disp: Option<i8>,
    pub imm: Operand,
}

/// The byte sequence does not classify as any instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unclassifiable byte sequence")
    }
}

impl std::error::Error for DecodeError {}

fn read_imm(kind: Imm, next: &mut impl FnMut() -> u8) -> Operand {
    match kind {
        Imm::None => Operand::None,
        Imm::Byte => Operand::Byte(next()),
        Imm::Word => {
            let lo = next() as u16;
            let hi = next() as u16;
            Operand::Word((hi << 8) | lo)
        }
    }
}

/// Classify the next instruction from a byte source.
///
/// Prefix handling: CB and ED take exactly one more opcode byte; DD/FD
/// re-enter the unprefixed table (with the index substitution applied
/// downstream) or chain into CB, where the displacement byte comes
/// BEFORE the final opcode. A prefix byte where an opcode is required
/// (DD DD, DD ED, ...) and any opcode marked invalid in its table are
/// rejected.
pub fn decode(mut next: impl FnMut() -> u8) -> Result<Decoded, DecodeError> {
    let first = next();
    match first {
        0xCB => {
            let opcode = next();
            Ok(Decoded {
                prefix: Prefix::Cb,
                opcode,
                disp: None,
                imm: Operand::None,
            })
        }
        0xED => {
            let opcode = next();
            let entry = &tables::ED[opcode as usize];
            if entry.action == tables::Action::Invalid {
                return Err(DecodeError);
            }
            let imm = read_imm(entry.imm, &mut next);
            Ok(Decoded {
                prefix: Prefix::Ed,
                opcode,
                disp: None,
                imm,
            })
        }
        0xDD | 0xFD => {
            let indexed = |cb: bool| match (first, cb) {
                (0xDD, false) => Prefix::Dd,
                (0xDD, true) => Prefix::DdCb,
                (0xFD, false) => Prefix::Fd,
                _ => Prefix::FdCb,
            };
            let second = next();
            if second == 0xCB {
                // Displacement is interleaved: DD CB d opcode.
                let disp = next() as i8;
                let opcode = next();
                return Ok(Decoded {
                    prefix: indexed(true),
                    opcode,
                    disp: Some(disp),
                    imm: Operand::None,
                });
            }
            let entry = &tables::MAIN[second as usize];
            if entry.action == tables::Action::Invalid {
                // Covers DD/FD/ED in the opcode slot.
                return Err(DecodeError);
            }
            let disp = if entry.disp {
                Some(next() as i8)
            } else {
                None
            };
            let imm = read_imm(entry.imm, &mut next);
            Ok(Decoded {
                prefix: indexed(false),
                opcode: second,
                disp,
                imm,
            })
        }
        opcode => {
            let entry = &tables::MAIN[opcode as usize];
            if entry.action == tables::Action::Invalid {
                return Err(DecodeError);
            }
            let imm = read_imm(entry.imm, &mut next);
            Ok(Decoded {
                prefix: Prefix::None,
                opcode,
                disp: None,
                imm,
            })
        }
    }
}
