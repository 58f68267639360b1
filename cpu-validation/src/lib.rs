use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use zet80_core::core::Bus;
use zet80_core::cpu::z80::Z80;

// --- VectorBus: flat 64KB memory recording which addresses ran hot ---

/// Bus for single-step vectors: plain 64 KiB of RAM, no devices, no
/// interrupts, I/O reads floating high. Every memory address an
/// instruction touches is recorded so fixtures can carry a sparse `ram`
/// instead of the whole address space.
pub struct VectorBus {
    pub memory: [u8; 0x10000],
    pub touched: BTreeSet<u16>,
}

impl VectorBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
            touched: BTreeSet::new(),
        }
    }
}

impl Default for VectorBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for VectorBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.touched.insert(addr);
        self.memory[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.touched.insert(addr);
        self.memory[addr as usize] = data;
    }
}

// --- JSON test vector types ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Z80TestCase {
    pub name: String,
    pub initial: Z80VectorState,
    #[serde(rename = "final")]
    pub final_state: Z80VectorState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Z80VectorState {
    pub pc: u16,
    pub sp: u16,
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub a_prime: u8,
    pub f_prime: u8,
    pub b_prime: u8,
    pub c_prime: u8,
    pub d_prime: u8,
    pub e_prime: u8,
    pub h_prime: u8,
    pub l_prime: u8,
    pub ix: u16,
    pub iy: u16,
    pub i: u8,
    pub r: u8,
    pub iff1: bool,
    pub iff2: bool,
    pub im: u8,
    pub ram: Vec<(u16, u8)>,
}

impl Z80VectorState {
    /// Snapshot every register; `ram` starts empty and is filled by the
    /// generator from the touched-address set.
    pub fn capture(cpu: &Z80) -> Self {
        Self {
            pc: cpu.pc,
            sp: cpu.sp,
            a: cpu.a,
            f: cpu.f,
            b: cpu.b,
            c: cpu.c,
            d: cpu.d,
            e: cpu.e,
            h: cpu.h,
            l: cpu.l,
            a_prime: cpu.a_prime,
            f_prime: cpu.f_prime,
            b_prime: cpu.b_prime,
            c_prime: cpu.c_prime,
            d_prime: cpu.d_prime,
            e_prime: cpu.e_prime,
            h_prime: cpu.h_prime,
            l_prime: cpu.l_prime,
            ix: cpu.ix,
            iy: cpu.iy,
            i: cpu.i,
            r: cpu.r,
            iff1: cpu.iff1,
            iff2: cpu.iff2,
            im: cpu.im,
            ram: Vec::new(),
        }
    }

    /// Load every register into `cpu`; memory is the caller's problem.
    pub fn restore(&self, cpu: &mut Z80) {
        cpu.pc = self.pc;
        cpu.sp = self.sp;
        cpu.a = self.a;
        cpu.f = self.f;
        cpu.b = self.b;
        cpu.c = self.c;
        cpu.d = self.d;
        cpu.e = self.e;
        cpu.h = self.h;
        cpu.l = self.l;
        cpu.a_prime = self.a_prime;
        cpu.f_prime = self.f_prime;
        cpu.b_prime = self.b_prime;
        cpu.c_prime = self.c_prime;
        cpu.d_prime = self.d_prime;
        cpu.e_prime = self.e_prime;
        cpu.h_prime = self.h_prime;
        cpu.l_prime = self.l_prime;
        cpu.ix = self.ix;
        cpu.iy = self.iy;
        cpu.i = self.i;
        cpu.r = self.r;
        cpu.iff1 = self.iff1;
        cpu.iff2 = self.iff2;
        cpu.im = self.im;
    }
}
