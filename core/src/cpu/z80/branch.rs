use crate::core::Bus;
use crate::cpu::z80::{Flag, Z80};

impl Z80 {
    /// Evaluate a condition code (3 bits from opcode bits 5-3).
    /// 0=NZ, 1=Z, 2=NC, 3=C, 4=PO, 5=PE, 6=P, 7=M
    fn condition(&self, cc: u8) -> bool {
        match cc {
            0 => !self.flag(Flag::Z),
            1 => self.flag(Flag::Z),
            2 => !self.flag(Flag::C),
            3 => self.flag(Flag::C),
            4 => !self.flag(Flag::PV),
            5 => self.flag(Flag::PV),
            6 => !self.flag(Flag::S),
            7 => self.flag(Flag::S),
            _ => unreachable!(),
        }
    }

    // --- Jumps ---

    /// JP nn
    pub(crate) fn op_jp(&mut self, target: u16) {
        self.pc = target;
    }

    /// JP cc, nn
    /// Opcode mask: 11 ccc 010
    pub(crate) fn op_jp_cc(&mut self, opcode: u8, target: u16) {
        let cc = (opcode >> 3) & 0x07;
        if self.condition(cc) {
            self.pc = target;
        }
    }

    /// JR e: signed offset from the following instruction
    pub(crate) fn op_jr(&mut self, e: u8) {
        self.pc = self.pc.wrapping_add(e as i8 as i16 as u16);
    }

    /// JR cc, e: NZ, Z, NC, C only
    /// Opcode mask: 00 1cc 000
    pub(crate) fn op_jr_cc(&mut self, opcode: u8, e: u8) {
        let cc = (opcode >> 3) & 0x03;
        if self.condition(cc) {
            self.op_jr(e);
        }
    }

    /// JP (HL): PC from the register, no memory read
    pub(crate) fn op_jp_hl(&mut self) {
        self.pc = self.get_rp(2);
    }

    /// DJNZ e: decrement B, jump while non-zero. No flags.
    pub(crate) fn op_djnz(&mut self, e: u8) {
        self.b = self.b.wrapping_sub(1);
        if self.b != 0 {
            self.op_jr(e);
        }
    }

    // --- Calls and returns ---

    /// CALL nn
    pub(crate) fn op_call<B: Bus + ?Sized>(&mut self, bus: &mut B, target: u16) {
        let ret = self.pc;
        self.push(bus, ret);
        self.pc = target;
    }

    /// CALL cc, nn
    /// Opcode mask: 11 ccc 100
    pub(crate) fn op_call_cc<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8, target: u16) {
        let cc = (opcode >> 3) & 0x07;
        if self.condition(cc) {
            self.op_call(bus, target);
        }
    }

    /// RET
    pub(crate) fn op_ret<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.pc = self.pop(bus);
    }

    /// RET cc
    /// Opcode mask: 11 ccc 000
    pub(crate) fn op_ret_cc<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8) {
        let cc = (opcode >> 3) & 0x07;
        if self.condition(cc) {
            self.pc = self.pop(bus);
        }
    }

    /// RST t: call into page zero, target from opcode bits 5-3.
    pub(crate) fn op_rst<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8) {
        let target = (opcode & 0x38) as u16;
        self.op_call(bus, target);
    }

    /// RETN: return and restore IFF1 from IFF2.
    pub(crate) fn op_retn<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.pc = self.pop(bus);
        self.iff1 = self.iff2;
    }

    /// RETI: identical IFF treatment to RETN.
    pub(crate) fn op_reti<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.pc = self.pop(bus);
        self.iff1 = self.iff2;
    }

    // --- Interrupt control ---

    /// DI: both flip-flops off immediately.
    pub(crate) fn op_di(&mut self) {
        self.iff1 = false;
        self.iff2 = false;
    }

    /// EI: both flip-flops on, but maskable acceptance is held off
    /// until after the following instruction.
    pub(crate) fn op_ei(&mut self) {
        self.iff1 = true;
        self.iff2 = true;
        self.ei_delay = true;
    }

    /// IM 0/1/2: ED 46, ED 56, ED 5E
    pub(crate) fn op_im(&mut self, opcode: u8) {
        self.im = match (opcode >> 3) & 0x07 {
            0 => 0,
            2 => 1,
            3 => 2,
            _ => unreachable!(),
        };
    }

    /// HALT: latch until an interrupt wakes the core.
    pub(crate) fn op_halt(&mut self) {
        self.halted = true;
    }
}
