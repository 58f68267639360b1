use crate::core::Bus;
use crate::cpu::z80::alu::logic8;
use crate::cpu::z80::{Flag, Z80};

impl Z80 {
    /// IN A, (n): no flags
    pub(crate) fn op_in_a_n<B: Bus + ?Sized>(&mut self, bus: &mut B, port: u8) {
        self.a = bus.io_read(port);
    }

    /// OUT (n), A: no flags
    pub(crate) fn op_out_n_a<B: Bus + ?Sized>(&mut self, bus: &mut B, port: u8) {
        bus.io_write(port, self.a);
    }

    /// IN r, (C): S/Z/PV from the byte, H = N = 0, C preserved.
    /// ED 70 (r = 6) samples the port for flags and discards the byte.
    pub(crate) fn op_in_r_c<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8) {
        let r = (opcode >> 3) & 0x07;
        let val = bus.io_read(self.c);
        if r != 6 {
            self.set_reg8(r, val);
        }
        self.apply_flags((self.f & Flag::C as u8) | logic8(val, false));
    }

    /// OUT (C), r: ED 71 (r = 6) drives a hard zero.
    pub(crate) fn op_out_c_r<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8) {
        let r = (opcode >> 3) & 0x07;
        let val = if r == 6 { 0 } else { self.get_reg8(r) };
        bus.io_write(self.c, val);
    }
}
