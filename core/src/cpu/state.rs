//! CPU state snapshot

use std::fmt;

use crate::cpu::z80::Flag;

/// Z80 CPU state snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Z80State {
    pub a: u8,        // Accumulator
    pub f: u8,        // Flags register
    pub b: u8,        // Register B
    pub c: u8,        // Register C
    pub d: u8,        // Register D
    pub e: u8,        // Register E
    pub h: u8,        // Register H
    pub l: u8,        // Register L
    pub a_prime: u8,  // Shadow accumulator
    pub f_prime: u8,  // Shadow flags
    pub b_prime: u8,  // Shadow B
    pub c_prime: u8,  // Shadow C
    pub d_prime: u8,  // Shadow D
    pub e_prime: u8,  // Shadow E
    pub h_prime: u8,  // Shadow H
    pub l_prime: u8,  // Shadow L
    pub ix: u16,      // Index register X
    pub iy: u16,      // Index register Y
    pub sp: u16,      // Stack pointer
    pub pc: u16,      // Program counter
    pub i: u8,        // Interrupt vector register
    pub r: u8,        // Memory refresh register
    pub iff1: bool,   // Interrupt flip-flop 1
    pub iff2: bool,   // Interrupt flip-flop 2
    pub im: u8,       // Interrupt mode (0, 1, 2)
    pub halted: bool, // HALT latch
}

/// Six-character flag rendering, S through C, letter when set.
pub fn flag_str(f: u8) -> String {
    let bit = |flag: Flag, ch: char| if f & flag as u8 != 0 { ch } else { '-' };
    [
        bit(Flag::S, 'S'),
        bit(Flag::Z, 'Z'),
        bit(Flag::H, 'H'),
        bit(Flag::PV, 'P'),
        bit(Flag::N, 'N'),
        bit(Flag::C, 'C'),
    ]
    .iter()
    .collect()
}

impl fmt::Display for Z80State {
    /// One-line rendering used as the tail of a trace record.
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            out,
            "A={:02X} F={} BC={:02X}{:02X} DE={:02X}{:02X} HL={:02X}{:02X} \
             IX={:04X} IY={:04X} SP={:04X} PC={:04X}",
            self.a,
            flag_str(self.f),
            self.b,
            self.c,
            self.d,
            self.e,
            self.h,
            self.l,
            self.ix,
            self.iy,
            self.sp,
            self.pc,
        )
    }
}
