mod alu;
mod bit;
mod block;
mod branch;
mod io;
mod load_store;
mod stack;

pub mod decode;
pub mod disasm;
pub mod tables;

use std::fmt;

use crate::core::bus::Bus;
use crate::cpu::state::Z80State;
use decode::{Decoded, Operand, Prefix};
use tables::Action;

#[repr(u8)]
#[derive(Copy, Clone, Debug)]
pub enum Flag {
    C = 0x01,  // Carry
    N = 0x02,  // Add/Subtract
    PV = 0x04, // Parity/Overflow
    H = 0x10,  // Half Carry
    Z = 0x40,  // Zero
    S = 0x80,  // Sign
}

/// Which register substitutes for HL while a DD/FD prefix is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexMode {
    HL,
    IX,
    IY,
}

/// What one call to `step` consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// A fetched instruction retired.
    Instruction,
    /// An interrupt was accepted instead of fetching.
    Interrupt,
    /// The halt latch is set; an implicit NOP ran.
    Halted,
}

/// Fatal execution fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// The bytes at `pc` do not classify as any instruction.
    UnknownOpcode { pc: u16, bytes: Vec<u8> },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::UnknownOpcode { pc, bytes } => {
                write!(f, "unknown opcode at {:#06X}:", pc)?;
                for byte in bytes {
                    write!(f, " {:02X}", byte)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for StepError {}

pub struct Z80 {
    // Registers
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    // Shadow Registers
    pub a_prime: u8,
    pub f_prime: u8,
    pub b_prime: u8,
    pub c_prime: u8,
    pub d_prime: u8,
    pub e_prime: u8,
    pub h_prime: u8,
    pub l_prime: u8,
    // Index & Special Registers
    pub ix: u16,
    pub iy: u16,
    pub i: u8,
    pub r: u8,
    pub sp: u16,
    pub pc: u16,

    // Internal state
    pub iff1: bool,
    pub iff2: bool,
    pub im: u8,
    pub halted: bool,
    pub(crate) ei_delay: bool,

    // Prefix handling
    pub(crate) index_mode: IndexMode,

    // Interrupt state
    pub(crate) nmi_previous: bool,
}

impl Default for Z80 {
    fn default() -> Self {
        Self::new()
    }
}

impl Z80 {
    pub fn new() -> Self {
        Self {
            a: 0xFF,
            f: 0xFF,
            b: 0,
            c: 0,
            d: 0,
            e: 0,
            h: 0,
            l: 0,
            a_prime: 0,
            f_prime: 0,
            b_prime: 0,
            c_prime: 0,
            d_prime: 0,
            e_prime: 0,
            h_prime: 0,
            l_prime: 0,
            ix: 0,
            iy: 0,
            i: 0,
            r: 0,
            sp: 0xFFFF,
            pc: 0x0000,
            iff1: false,
            iff2: false,
            im: 0,
            halted: false,
            ei_delay: false,
            index_mode: IndexMode::HL,
            nmi_previous: false,
        }
    }

    /// Power-on state: AF and SP high, everything else zeroed, interrupts
    /// disabled, IM 0.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // --- 16-bit register access ---

    pub fn get_bc(&self) -> u16 {
        ((self.b as u16) << 8) | self.c as u16
    }
    pub fn set_bc(&mut self, val: u16) {
        self.b = (val >> 8) as u8;
        self.c = val as u8;
    }

    pub fn get_de(&self) -> u16 {
        ((self.d as u16) << 8) | self.e as u16
    }
    pub fn set_de(&mut self, val: u16) {
        self.d = (val >> 8) as u8;
        self.e = val as u8;
    }

    pub fn get_hl(&self) -> u16 {
        ((self.h as u16) << 8) | self.l as u16
    }
    pub fn set_hl(&mut self, val: u16) {
        self.h = (val >> 8) as u8;
        self.l = val as u8;
    }

    pub fn get_af(&self) -> u16 {
        ((self.a as u16) << 8) | self.f as u16
    }
    pub fn set_af(&mut self, val: u16) {
        self.a = (val >> 8) as u8;
        self.f = val as u8;
    }

    // --- Flag access ---

    pub fn flag(&self, flag: Flag) -> bool {
        self.f & flag as u8 != 0
    }

    pub fn set_flag(&mut self, flag: Flag, on: bool) {
        if on {
            self.f |= flag as u8;
        } else {
            self.f &= !(flag as u8);
        }
    }

    /// Install a computed flag byte. Bits 3 and 5 are not modeled by
    /// any operation; they only move when F is written as data
    /// (POP AF, EX AF, AF'), so keep whatever is there.
    pub(crate) fn apply_flags(&mut self, f: u8) {
        self.f = (self.f & 0x28) | (f & !0x28);
    }

    // --- Selector-table access ---

    /// 8-bit register by r-table selector (0=B 1=C 2=D 3=E 4=H 5=L 7=A).
    /// Selector 6 is the memory operand and never reaches here.
    pub fn get_reg8(&self, index: u8) -> u8 {
        match index {
            0 => self.b,
            1 => self.c,
            2 => self.d,
            3 => self.e,
            4 => self.h,
            5 => self.l,
            7 => self.a,
            _ => unreachable!("get_reg8 called with index {}", index),
        }
    }

    pub fn set_reg8(&mut self, index: u8, val: u8) {
        match index {
            0 => self.b = val,
            1 => self.c = val,
            2 => self.d = val,
            3 => self.e = val,
            4 => self.h = val,
            5 => self.l = val,
            7 => self.a = val,
            _ => unreachable!("set_reg8 called with index {}", index),
        }
    }

    /// 8-bit register by selector, substituting IXH/IXL/IYH/IYL for H/L
    /// while a DD/FD prefix is active (the p/q tables).
    pub fn get_reg8_ix(&self, index: u8) -> u8 {
        match (index, self.index_mode) {
            (4, IndexMode::IX) => (self.ix >> 8) as u8,
            (5, IndexMode::IX) => self.ix as u8,
            (4, IndexMode::IY) => (self.iy >> 8) as u8,
            (5, IndexMode::IY) => self.iy as u8,
            _ => self.get_reg8(index),
        }
    }

    pub fn set_reg8_ix(&mut self, index: u8, val: u8) {
        match (index, self.index_mode) {
            (4, IndexMode::IX) => self.ix = (self.ix & 0x00FF) | ((val as u16) << 8),
            (5, IndexMode::IX) => self.ix = (self.ix & 0xFF00) | val as u16,
            (4, IndexMode::IY) => self.iy = (self.iy & 0x00FF) | ((val as u16) << 8),
            (5, IndexMode::IY) => self.iy = (self.iy & 0xFF00) | val as u16,
            _ => self.set_reg8(index, val),
        }
    }

    /// 16-bit pair by pair-table selector (0=BC 1=DE 2=HL/IX/IY 3=SP).
    pub(crate) fn get_rp(&self, index: u8) -> u16 {
        match index {
            0 => self.get_bc(),
            1 => self.get_de(),
            2 => match self.index_mode {
                IndexMode::HL => self.get_hl(),
                IndexMode::IX => self.ix,
                IndexMode::IY => self.iy,
            },
            3 => self.sp,
            _ => unreachable!("get_rp called with index {}", index),
        }
    }

    pub(crate) fn set_rp(&mut self, index: u8, val: u16) {
        match index {
            0 => self.set_bc(val),
            1 => self.set_de(val),
            2 => match self.index_mode {
                IndexMode::HL => self.set_hl(val),
                IndexMode::IX => self.ix = val,
                IndexMode::IY => self.iy = val,
            },
            3 => self.sp = val,
            _ => unreachable!("set_rp called with index {}", index),
        }
    }

    /// Pair-table selector with AF in the fourth slot (PUSH/POP).
    pub(crate) fn get_rp_af(&self, index: u8) -> u16 {
        match index {
            3 => self.get_af(),
            _ => self.get_rp(index),
        }
    }

    pub(crate) fn set_rp_af(&mut self, index: u8, val: u16) {
        match index {
            3 => self.set_af(val),
            _ => self.set_rp(index, val),
        }
    }

    /// Effective address of the (HL)/(IX+d)/(IY+d) memory operand.
    pub(crate) fn index_addr(&self, disp: Option<i8>) -> u16 {
        match self.index_mode {
            IndexMode::HL => self.get_hl(),
            IndexMode::IX => self.ix.wrapping_add(disp.unwrap_or(0) as i16 as u16),
            IndexMode::IY => self.iy.wrapping_add(disp.unwrap_or(0) as i16 as u16),
        }
    }

    /// Refresh-counter bump: low 7 bits count, bit 7 only changes via
    /// LD R, A.
    pub(crate) fn bump_r(&mut self, fetches: u8) {
        self.r = (self.r & 0x80) | (self.r.wrapping_add(fetches) & 0x7F);
    }

    pub fn snapshot(&self) -> Z80State {
        Z80State {
            a: self.a,
            f: self.f,
            b: self.b,
            c: self.c,
            d: self.d,
            e: self.e,
            h: self.h,
            l: self.l,
            a_prime: self.a_prime,
            f_prime: self.f_prime,
            b_prime: self.b_prime,
            c_prime: self.c_prime,
            d_prime: self.d_prime,
            e_prime: self.e_prime,
            h_prime: self.h_prime,
            l_prime: self.l_prime,
            ix: self.ix,
            iy: self.iy,
            sp: self.sp,
            pc: self.pc,
            i: self.i,
            r: self.r,
            iff1: self.iff1,
            iff2: self.iff2,
            im: self.im,
            halted: self.halted,
        }
    }

    // --- Execution ---

    /// One full step: interrupt check, then either an accepted interrupt,
    /// a halted NOP, or one fetched-decoded-executed instruction.
    pub fn step<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<StepEvent, StepError> {
        if self.interrupt_check(bus) {
            return Ok(StepEvent::Interrupt);
        }
        if self.halted {
            // Implicit NOP: time advances, PC stays put.
            self.bump_r(1);
            return Ok(StepEvent::Halted);
        }

        let ins = self.fetch_decode(bus)?;
        self.index_mode = match ins.prefix {
            Prefix::Dd | Prefix::DdCb => IndexMode::IX,
            Prefix::Fd | Prefix::FdCb => IndexMode::IY,
            _ => IndexMode::HL,
        };
        self.bump_r(if ins.prefix == Prefix::None { 1 } else { 2 });
        self.dispatch(bus, &ins);
        Ok(StepEvent::Instruction)
    }

    /// Read and classify the instruction at PC, advancing PC past it.
    /// The cursor advance is the fall-through PC increment; control-flow
    /// handlers overwrite PC afterwards.
    fn fetch_decode<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<Decoded, StepError> {
        let start = self.pc;
        let mut raw = [0u8; 4];
        let mut len = 0usize;
        let decoded = {
            let pc = &mut self.pc;
            decode::decode(|| {
                let byte = bus.read(*pc);
                *pc = pc.wrapping_add(1);
                if len < raw.len() {
                    raw[len] = byte;
                    len += 1;
                }
                byte
            })
        };
        decoded.map_err(|_| StepError::UnknownOpcode {
            pc: start,
            bytes: raw[..len].to_vec(),
        })
    }

    fn dispatch<B: Bus + ?Sized>(&mut self, bus: &mut B, ins: &Decoded) {
        match ins.prefix {
            Prefix::Cb => self.op_cb(bus, ins.opcode, None),
            Prefix::DdCb | Prefix::FdCb => self.op_cb(bus, ins.opcode, ins.disp),
            Prefix::Ed => self.exec_ed(bus, ins),
            Prefix::None | Prefix::Dd | Prefix::Fd => self.exec_main(bus, ins),
        }
    }

    fn exec_main<B: Bus + ?Sized>(&mut self, bus: &mut B, ins: &Decoded) {
        let op = ins.opcode;
        match tables::MAIN[op as usize].action {
            Action::Nop => {}
            Action::Halt => self.op_halt(),

            Action::LdRR => self.op_ld_r_r(bus, op, ins.disp),
            Action::LdRN => self.op_ld_r_n(bus, op, ins.imm.byte(), ins.disp),
            Action::LdRrNn => self.op_ld_rr_nn(op, ins.imm.word()),
            Action::LdABc => self.op_ld_a_bc(bus),
            Action::LdADe => self.op_ld_a_de(bus),
            Action::LdBcA => self.op_ld_bc_a(bus),
            Action::LdDeA => self.op_ld_de_a(bus),
            Action::LdANn => self.op_ld_a_nn(bus, ins.imm.word()),
            Action::LdNnA => self.op_ld_nn_a(bus, ins.imm.word()),
            Action::LdNnHl => self.op_ld_nn_hl(bus, ins.imm.word()),
            Action::LdHlNnInd => self.op_ld_hl_nn_ind(bus, ins.imm.word()),
            Action::LdSpHl => self.op_ld_sp_hl(),

            Action::IncR => self.op_inc_r(bus, op, ins.disp),
            Action::DecR => self.op_dec_r(bus, op, ins.disp),
            Action::IncRr => self.op_inc_rr(op),
            Action::DecRr => self.op_dec_rr(op),
            Action::AluR => self.op_alu_r(bus, op, ins.disp),
            Action::AluN => self.op_alu_n(op, ins.imm.byte()),
            Action::AddHlRr => self.op_add_hl_rr(op),

            Action::Rlca => self.op_rlca(),
            Action::Rrca => self.op_rrca(),
            Action::Rla => self.op_rla(),
            Action::Rra => self.op_rra(),
            Action::Daa => self.op_daa(),
            Action::Cpl => self.op_cpl(),
            Action::Scf => self.op_scf(),
            Action::Ccf => self.op_ccf(),

            Action::Jp => self.op_jp(ins.imm.word()),
            Action::JpCc => self.op_jp_cc(op, ins.imm.word()),
            Action::Jr => self.op_jr(ins.imm.byte()),
            Action::JrCc => self.op_jr_cc(op, ins.imm.byte()),
            Action::JpHl => self.op_jp_hl(),
            Action::Djnz => self.op_djnz(ins.imm.byte()),
            Action::Call => self.op_call(bus, ins.imm.word()),
            Action::CallCc => self.op_call_cc(bus, op, ins.imm.word()),
            Action::Ret => self.op_ret(bus),
            Action::RetCc => self.op_ret_cc(bus, op),
            Action::Rst => self.op_rst(bus, op),

            Action::PushRr => self.op_push_rr(bus, op),
            Action::PopRr => self.op_pop_rr(bus, op),

            Action::ExAfAf => self.op_ex_af_af(),
            Action::Exx => self.op_exx(),
            Action::ExDeHl => self.op_ex_de_hl(),
            Action::ExSpHl => self.op_ex_sp_hl(bus),

            Action::InAN => self.op_in_a_n(bus, ins.imm.byte()),
            Action::OutNA => self.op_out_n_a(bus, ins.imm.byte()),
            Action::Di => self.op_di(),
            Action::Ei => self.op_ei(),

            other => unreachable!("action {:?} in unprefixed dispatch", other),
        }
    }

    fn exec_ed<B: Bus + ?Sized>(&mut self, bus: &mut B, ins: &Decoded) {
        let op = ins.opcode;
        match tables::ED[op as usize].action {
            Action::InRC => self.op_in_r_c(bus, op),
            Action::OutCR => self.op_out_c_r(bus, op),
            Action::SbcHlRr => self.op_sbc_hl_rr(op),
            Action::AdcHlRr => self.op_adc_hl_rr(op),
            Action::LdNnRrEd => self.op_ld_nn_rr_ed(bus, op, ins.imm.word()),
            Action::LdRrNnEd => self.op_ld_rr_nn_ed(bus, op, ins.imm.word()),
            Action::Neg => self.op_neg(),
            Action::RetN => self.op_retn(bus),
            Action::RetI => self.op_reti(bus),
            Action::Im => self.op_im(op),
            Action::LdIA => self.op_ld_i_a(),
            Action::LdRA => self.op_ld_r_a(),
            Action::LdAI => self.op_ld_a_i(),
            Action::LdAR => self.op_ld_a_r(),
            Action::Rrd => self.op_rrd(bus),
            Action::Rld => self.op_rld(bus),

            Action::Ldi => self.op_block_ld(bus, 1, false),
            Action::Ldd => self.op_block_ld(bus, -1, false),
            Action::Ldir => self.op_block_ld(bus, 1, true),
            Action::Lddr => self.op_block_ld(bus, -1, true),
            Action::Cpi => self.op_block_cp(bus, 1, false),
            Action::Cpd => self.op_block_cp(bus, -1, false),
            Action::Cpir => self.op_block_cp(bus, 1, true),
            Action::Cpdr => self.op_block_cp(bus, -1, true),
            Action::Ini => self.op_block_in(bus, 1, false),
            Action::Ind => self.op_block_in(bus, -1, false),
            Action::Inir => self.op_block_in(bus, 1, true),
            Action::Indr => self.op_block_in(bus, -1, true),
            Action::Outi => self.op_block_out(bus, 1, false),
            Action::Outd => self.op_block_out(bus, -1, false),
            Action::Otir => self.op_block_out(bus, 1, true),
            Action::Otdr => self.op_block_out(bus, -1, true),

            other => unreachable!("action {:?} in ED dispatch", other),
        }
    }

    // --- Interrupt acceptance ---

    /// Sample the lines and accept at most one interrupt. Returns true
    /// when an interrupt consumed this step.
    fn interrupt_check<B: Bus + ?Sized>(&mut self, bus: &mut B) -> bool {
        let ints = bus.check_interrupts();

        // NMI: edge-triggered, higher priority than IRQ.
        let nmi_edge = ints.nmi && !self.nmi_previous;
        self.nmi_previous = ints.nmi;

        // EI enables after the instruction following it; only maskable
        // acceptance is delayed.
        let ei_was_delaying = self.ei_delay;
        self.ei_delay = false;

        if nmi_edge {
            self.halted = false;
            self.bump_r(1);
            self.iff2 = self.iff1;
            self.iff1 = false;
            let ret = self.pc;
            self.push(bus, ret);
            self.pc = 0x0066;
            return true;
        }

        if ints.irq && self.iff1 && !ei_was_delaying {
            bus.ack_irq();
            self.halted = false;
            self.bump_r(1);
            self.iff1 = false;
            self.iff2 = false;
            match self.im {
                2 => {
                    let ret = self.pc;
                    self.push(bus, ret);
                    let vector = ((self.i as u16) << 8) | (ints.data & 0xFE) as u16;
                    let lo = bus.read(vector) as u16;
                    let hi = bus.read(vector.wrapping_add(1)) as u16;
                    self.pc = (hi << 8) | lo;
                }
                1 => {
                    let ret = self.pc;
                    self.push(bus, ret);
                    self.pc = 0x0038;
                }
                _ => self.exec_im0(bus, ints.data),
            }
            return true;
        }

        false
    }

    /// IM 0: run the device-supplied byte as a single-byte instruction.
    /// A byte that would need operand bytes (or is a prefix) degrades to
    /// NOP; multi-byte sequences are not supported.
    fn exec_im0<B: Bus + ?Sized>(&mut self, bus: &mut B, supplied: u8) {
        let entry = &tables::MAIN[supplied as usize];
        if entry.action == Action::Invalid || entry.imm != tables::Imm::None {
            return;
        }
        self.index_mode = IndexMode::HL;
        let ins = Decoded {
            prefix: Prefix::None,
            opcode: supplied,
            disp: None,
            imm: Operand::None,
        };
        self.exec_main(bus, &ins);
    }
}
