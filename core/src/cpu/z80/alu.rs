use crate::core::Bus;
use crate::cpu::z80::{Flag, Z80};

// --- Flag helpers ---
//
// Pure functions from operands to (result, flags). Handlers own all
// register and memory traffic; nothing here touches CPU state.

pub(crate) fn parity(val: u8) -> bool {
    val.count_ones() % 2 == 0
}

pub(crate) fn add8(a: u8, val: u8, carry: bool) -> (u8, u8) {
    let c = carry as u8;
    let wide = a as u16 + val as u16 + c as u16;
    let result = wide as u8;

    let mut f = 0;
    if result == 0 { f |= Flag::Z as u8; }
    if (result & 0x80) != 0 { f |= Flag::S as u8; }
    if ((a & 0xF) + (val & 0xF) + c) > 0xF { f |= Flag::H as u8; }
    if ((a ^ result) & (val ^ result) & 0x80) != 0 { f |= Flag::PV as u8; }
    if wide > 0xFF { f |= Flag::C as u8; }
    (result, f)
}

pub(crate) fn sub8(a: u8, val: u8, carry: bool) -> (u8, u8) {
    let c = carry as u8;
    let wide = (a as u16).wrapping_sub(val as u16).wrapping_sub(c as u16);
    let result = wide as u8;

    let mut f = Flag::N as u8;
    if result == 0 { f |= Flag::Z as u8; }
    if (result & 0x80) != 0 { f |= Flag::S as u8; }
    if (a & 0xF) < (val & 0xF) + c { f |= Flag::H as u8; }
    if ((a ^ val) & (a ^ result) & 0x80) != 0 { f |= Flag::PV as u8; }
    if wide > 0xFF { f |= Flag::C as u8; }
    (result, f)
}

/// Flags for AND/XOR/OR on an already-computed result. AND sets H,
/// the others clear it; N and C always clear.
pub(crate) fn logic8(result: u8, is_and: bool) -> u8 {
    let mut f = 0;
    if result == 0 { f |= Flag::Z as u8; }
    if (result & 0x80) != 0 { f |= Flag::S as u8; }
    if parity(result) { f |= Flag::PV as u8; }
    if is_and { f |= Flag::H as u8; }
    f
}

/// INC: C preserved from `f_in`, PV only on the 0x7F -> 0x80 overflow.
pub(crate) fn inc8(val: u8, f_in: u8) -> (u8, u8) {
    let result = val.wrapping_add(1);
    let mut f = f_in & Flag::C as u8;
    if result == 0 { f |= Flag::Z as u8; }
    if (result & 0x80) != 0 { f |= Flag::S as u8; }
    if (val & 0xF) == 0xF { f |= Flag::H as u8; }
    if val == 0x7F { f |= Flag::PV as u8; }
    (result, f)
}

/// DEC: C preserved, N set, PV only on the 0x80 -> 0x7F overflow.
pub(crate) fn dec8(val: u8, f_in: u8) -> (u8, u8) {
    let result = val.wrapping_sub(1);
    let mut f = (f_in & Flag::C as u8) | Flag::N as u8;
    if result == 0 { f |= Flag::Z as u8; }
    if (result & 0x80) != 0 { f |= Flag::S as u8; }
    if (val & 0xF) == 0x0 { f |= Flag::H as u8; }
    if val == 0x80 { f |= Flag::PV as u8; }
    (result, f)
}

/// ADD HL, rr: H from bit 11, C from bit 15, N cleared. S, Z, PV
/// preserved from `f_in`.
pub(crate) fn add16(hl: u16, rr: u16, f_in: u8) -> (u16, u8) {
    let wide = hl as u32 + rr as u32;
    let mut f = f_in & (Flag::S as u8 | Flag::Z as u8 | Flag::PV as u8);
    if (hl & 0x0FFF) + (rr & 0x0FFF) > 0x0FFF { f |= Flag::H as u8; }
    if wide > 0xFFFF { f |= Flag::C as u8; }
    (wide as u16, f)
}

/// ADC HL, rr: full 16-bit flags, S from bit 15, Z over all 16 bits.
pub(crate) fn adc16(hl: u16, rr: u16, carry: bool) -> (u16, u8) {
    let c = carry as u16;
    let wide = hl as u32 + rr as u32 + c as u32;
    let result = wide as u16;

    let mut f = 0;
    if result == 0 { f |= Flag::Z as u8; }
    if (result & 0x8000) != 0 { f |= Flag::S as u8; }
    if (hl & 0x0FFF) + (rr & 0x0FFF) + c > 0x0FFF { f |= Flag::H as u8; }
    if ((hl ^ result) & (rr ^ result) & 0x8000) != 0 { f |= Flag::PV as u8; }
    if wide > 0xFFFF { f |= Flag::C as u8; }
    (result, f)
}

/// SBC HL, rr: full 16-bit flags with N set.
pub(crate) fn sbc16(hl: u16, rr: u16, carry: bool) -> (u16, u8) {
    let c = carry as u16;
    let wide = (hl as u32).wrapping_sub(rr as u32).wrapping_sub(c as u32);
    let result = wide as u16;

    let mut f = Flag::N as u8;
    if result == 0 { f |= Flag::Z as u8; }
    if (result & 0x8000) != 0 { f |= Flag::S as u8; }
    if (hl & 0x0FFF) < (rr & 0x0FFF) + c { f |= Flag::H as u8; }
    if ((hl ^ rr) & (hl ^ result) & 0x8000) != 0 { f |= Flag::PV as u8; }
    if wide > 0xFFFF { f |= Flag::C as u8; }
    (result, f)
}

/// DAA correction on A after a BCD add or subtract, steered by N, H, C.
pub(crate) fn daa(a: u8, f_in: u8) -> (u8, u8) {
    let n = (f_in & Flag::N as u8) != 0;
    let old_h = (f_in & Flag::H as u8) != 0;
    let old_c = (f_in & Flag::C as u8) != 0;

    let mut correction = 0u8;
    let mut new_c = old_c;

    if old_h || (a & 0x0F) > 9 {
        correction |= 0x06;
    }
    if old_c || a > 0x99 {
        correction |= 0x60;
        new_c = true;
    }

    let result = if n {
        a.wrapping_sub(correction)
    } else {
        a.wrapping_add(correction)
    };

    let new_h = if n {
        old_h && (a & 0x0F) < 6
    } else {
        (a & 0x0F) > 9
    };

    let mut f = 0;
    if new_c { f |= Flag::C as u8; }
    if n { f |= Flag::N as u8; }
    if new_h { f |= Flag::H as u8; }
    if result == 0 { f |= Flag::Z as u8; }
    if (result & 0x80) != 0 { f |= Flag::S as u8; }
    if parity(result) { f |= Flag::PV as u8; }
    (result, f)
}

impl Z80 {
    fn alu_apply(&mut self, alu_op: u8, val: u8) {
        match alu_op {
            0 => {
                let (result, f) = add8(self.a, val, false);
                self.a = result;
                self.apply_flags(f);
            }
            1 => {
                let (result, f) = add8(self.a, val, self.flag(Flag::C));
                self.a = result;
                self.apply_flags(f);
            }
            2 => {
                let (result, f) = sub8(self.a, val, false);
                self.a = result;
                self.apply_flags(f);
            }
            3 => {
                let (result, f) = sub8(self.a, val, self.flag(Flag::C));
                self.a = result;
                self.apply_flags(f);
            }
            4 => {
                self.a &= val;
                self.apply_flags(logic8(self.a, true));
            }
            5 => {
                self.a ^= val;
                self.apply_flags(logic8(self.a, false));
            }
            6 => {
                self.a |= val;
                self.apply_flags(logic8(self.a, false));
            }
            7 => {
                // CP: compare discards the difference
                let (_, f) = sub8(self.a, val, false);
                self.apply_flags(f);
            }
            _ => unreachable!(),
        }
    }

    // --- 8-bit arithmetic ---

    /// ALU A, r / ALU A, (HL)
    /// ADD, ADC, SUB, SBC, AND, XOR, OR, CP
    /// Opcode mask: 10 ooo rrr
    pub(crate) fn op_alu_r<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8, disp: Option<i8>) {
        let alu_op = (opcode >> 3) & 0x07;
        let r = opcode & 0x07;
        let val = if r == 6 {
            bus.read(self.index_addr(disp))
        } else {
            self.get_reg8_ix(r)
        };
        self.alu_apply(alu_op, val);
    }

    /// ALU A, n
    /// Opcode mask: 11 ooo 110
    pub(crate) fn op_alu_n(&mut self, opcode: u8, val: u8) {
        let alu_op = (opcode >> 3) & 0x07;
        self.alu_apply(alu_op, val);
    }

    /// INC r / INC (HL): C preserved
    /// Opcode mask: 00 rrr 100
    pub(crate) fn op_inc_r<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8, disp: Option<i8>) {
        let r = (opcode >> 3) & 0x07;
        if r == 6 {
            let addr = self.index_addr(disp);
            let (result, f) = inc8(bus.read(addr), self.f);
            bus.write(addr, result);
            self.apply_flags(f);
        } else {
            let (result, f) = inc8(self.get_reg8_ix(r), self.f);
            self.set_reg8_ix(r, result);
            self.apply_flags(f);
        }
    }

    /// DEC r / DEC (HL): C preserved
    /// Opcode mask: 00 rrr 101
    pub(crate) fn op_dec_r<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8, disp: Option<i8>) {
        let r = (opcode >> 3) & 0x07;
        if r == 6 {
            let addr = self.index_addr(disp);
            let (result, f) = dec8(bus.read(addr), self.f);
            bus.write(addr, result);
            self.apply_flags(f);
        } else {
            let (result, f) = dec8(self.get_reg8_ix(r), self.f);
            self.set_reg8_ix(r, result);
            self.apply_flags(f);
        }
    }

    /// NEG: A = 0 - A. PV set when A was 0x80, C set when A was not 0.
    pub(crate) fn op_neg(&mut self) {
        let (result, f) = sub8(0, self.a, false);
        self.a = result;
        self.apply_flags(f);
    }

    // --- 16-bit arithmetic ---

    /// INC rr: no flags
    /// Opcode mask: 00 rr0 011
    pub(crate) fn op_inc_rr(&mut self, opcode: u8) {
        let rp = (opcode >> 4) & 0x03;
        let val = self.get_rp(rp).wrapping_add(1);
        self.set_rp(rp, val);
    }

    /// DEC rr: no flags
    /// Opcode mask: 00 rr1 011
    pub(crate) fn op_dec_rr(&mut self, opcode: u8) {
        let rp = (opcode >> 4) & 0x03;
        let val = self.get_rp(rp).wrapping_sub(1);
        self.set_rp(rp, val);
    }

    /// ADD HL, rr (HL doubles as IX/IY under a prefix)
    /// Opcode mask: 00 rr1 001
    pub(crate) fn op_add_hl_rr(&mut self, opcode: u8) {
        let rp = (opcode >> 4) & 0x03;
        let (result, f) = add16(self.get_rp(2), self.get_rp(rp), self.f);
        self.set_rp(2, result);
        self.apply_flags(f);
    }

    /// ADC HL, rr: ED 01 rr1 010
    pub(crate) fn op_adc_hl_rr(&mut self, opcode: u8) {
        let rp = (opcode >> 4) & 0x03;
        let (result, f) = adc16(self.get_hl(), self.get_rp(rp), self.flag(Flag::C));
        self.set_hl(result);
        self.apply_flags(f);
    }

    /// SBC HL, rr: ED 01 rr0 010
    pub(crate) fn op_sbc_hl_rr(&mut self, opcode: u8) {
        let rp = (opcode >> 4) & 0x03;
        let (result, f) = sbc16(self.get_hl(), self.get_rp(rp), self.flag(Flag::C));
        self.set_hl(result);
        self.apply_flags(f);
    }

    // --- Accumulator rotates ---

    /// RLCA: old bit 7 to carry and bit 0. H = N = 0, S/Z/PV preserved.
    pub(crate) fn op_rlca(&mut self) {
        let bit7 = (self.a >> 7) & 1;
        self.a = (self.a << 1) | bit7;
        let mut f = self.f & (Flag::S as u8 | Flag::Z as u8 | Flag::PV as u8);
        if bit7 != 0 { f |= Flag::C as u8; }
        self.apply_flags(f);
    }

    /// RRCA: old bit 0 to carry and bit 7.
    pub(crate) fn op_rrca(&mut self) {
        let bit0 = self.a & 1;
        self.a = (self.a >> 1) | (bit0 << 7);
        let mut f = self.f & (Flag::S as u8 | Flag::Z as u8 | Flag::PV as u8);
        if bit0 != 0 { f |= Flag::C as u8; }
        self.apply_flags(f);
    }

    /// RLA: old bit 7 to C, old C to bit 0.
    pub(crate) fn op_rla(&mut self) {
        let old_carry = if self.flag(Flag::C) { 1u8 } else { 0 };
        let bit7 = (self.a >> 7) & 1;
        self.a = (self.a << 1) | old_carry;
        let mut f = self.f & (Flag::S as u8 | Flag::Z as u8 | Flag::PV as u8);
        if bit7 != 0 { f |= Flag::C as u8; }
        self.apply_flags(f);
    }

    /// RRA: old bit 0 to C, old C to bit 7.
    pub(crate) fn op_rra(&mut self) {
        let old_carry = if self.flag(Flag::C) { 0x80u8 } else { 0 };
        let bit0 = self.a & 1;
        self.a = (self.a >> 1) | old_carry;
        let mut f = self.f & (Flag::S as u8 | Flag::Z as u8 | Flag::PV as u8);
        if bit0 != 0 { f |= Flag::C as u8; }
        self.apply_flags(f);
    }

    // --- Misc ALU ---

    /// DAA: decimal adjust accumulator after BCD add/sub.
    pub(crate) fn op_daa(&mut self) {
        let (result, f) = daa(self.a, self.f);
        self.a = result;
        self.apply_flags(f);
    }

    /// CPL: complement A. Sets H and N; S, Z, PV, C preserved.
    pub(crate) fn op_cpl(&mut self) {
        self.a = !self.a;
        let mut f = self.f & (Flag::S as u8 | Flag::Z as u8 | Flag::PV as u8 | Flag::C as u8);
        f |= Flag::H as u8 | Flag::N as u8;
        self.apply_flags(f);
    }

    /// SCF: C = 1, H = 0, N = 0. S, Z, PV preserved.
    pub(crate) fn op_scf(&mut self) {
        let mut f = self.f & (Flag::S as u8 | Flag::Z as u8 | Flag::PV as u8);
        f |= Flag::C as u8;
        self.apply_flags(f);
    }

    /// CCF: H = old C, C inverted, N = 0. S, Z, PV preserved.
    pub(crate) fn op_ccf(&mut self) {
        let old_c = self.f & Flag::C as u8;
        let mut f = self.f & (Flag::S as u8 | Flag::Z as u8 | Flag::PV as u8);
        if old_c != 0 { f |= Flag::H as u8; }
        if old_c == 0 { f |= Flag::C as u8; }
        self.apply_flags(f);
    }
}
