use crate::core::Bus;
use crate::cpu::z80::alu::logic8;
use crate::cpu::z80::{Flag, Z80};

/// One CB rotate/shift kind applied to a value, returning (result, flags).
/// kind: 0=RLC, 1=RRC, 2=RL, 3=RR, 4=SLA, 5=SRA, 6=SLL, 7=SRL.
/// SLL shifts a one into bit 0; SRA keeps the sign bit. Flags are
/// S/Z/PV from the result, H = N = 0, C = the bit shifted out.
pub(crate) fn rotate(kind: u8, val: u8, carry: bool) -> (u8, u8) {
    let (result, c) = match kind {
        0 => ((val << 1) | (val >> 7), val & 0x80 != 0),
        1 => ((val >> 1) | (val << 7), val & 0x01 != 0),
        2 => ((val << 1) | carry as u8, val & 0x80 != 0),
        3 => ((val >> 1) | ((carry as u8) << 7), val & 0x01 != 0),
        4 => (val << 1, val & 0x80 != 0),
        5 => ((val >> 1) | (val & 0x80), val & 0x01 != 0),
        6 => ((val << 1) | 1, val & 0x80 != 0),
        7 => (val >> 1, val & 0x01 != 0),
        _ => unreachable!(),
    };
    let mut f = logic8(result, false);
    if c { f |= Flag::C as u8; }
    (result, f)
}

/// BIT n flags: Z set iff the bit is clear, PV mirrors Z, S only for a
/// set bit 7, H set, N clear, C preserved.
fn bit_flags(f_in: u8, val: u8, n: u8) -> u8 {
    let set = val & (1 << n) != 0;
    let mut f = (f_in & Flag::C as u8) | Flag::H as u8;
    if !set { f |= Flag::Z as u8 | Flag::PV as u8; }
    if n == 7 && set { f |= Flag::S as u8; }
    f
}

impl Z80 {
    /// The whole CB page: rotates/shifts, BIT, RES, SET.
    /// Opcode mask: qq yyy zzz (qq picks the family).
    ///
    /// Plain CB never substitutes the index halves. With a displacement
    /// (DDCB/FDCB) the operand is always the indexed memory byte, BIT
    /// ignores z, and the other families copy the result into the plain
    /// register z when z != 6.
    pub(crate) fn op_cb<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8, disp: Option<i8>) {
        let quadrant = opcode >> 6;
        let y = (opcode >> 3) & 0x07;
        let z = opcode & 0x07;
        let indexed = disp.is_some();
        let mem = indexed || z == 6;

        let addr = if mem { self.index_addr(disp) } else { 0 };
        let val = if mem { bus.read(addr) } else { self.get_reg8(z) };

        if quadrant == 1 {
            // BIT n: flags only, nothing written back
            self.apply_flags(bit_flags(self.f, val, y));
            return;
        }

        let result = match quadrant {
            0 => {
                let (result, f) = rotate(y, val, self.flag(Flag::C));
                self.apply_flags(f);
                result
            }
            2 => val & !(1 << y),
            _ => val | (1 << y),
        };

        if mem {
            bus.write(addr, result);
            if indexed && z != 6 {
                self.set_reg8(z, result);
            }
        } else {
            self.set_reg8(z, result);
        }
    }

    /// RRD: (HL) low nibble into A's low nibble, A's old low nibble
    /// into (HL) high. S/Z/PV from A, H = N = 0, C preserved.
    pub(crate) fn op_rrd<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let addr = self.get_hl();
        let m = bus.read(addr);
        bus.write(addr, (self.a << 4) | (m >> 4));
        self.a = (self.a & 0xF0) | (m & 0x0F);
        self.apply_flags((self.f & Flag::C as u8) | logic8(self.a, false));
    }

    /// RLD: the nibble rotation in the other direction.
    pub(crate) fn op_rld<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let addr = self.get_hl();
        let m = bus.read(addr);
        bus.write(addr, (m << 4) | (self.a & 0x0F));
        self.a = (self.a & 0xF0) | (m >> 4);
        self.apply_flags((self.f & Flag::C as u8) | logic8(self.a, false));
    }
}
