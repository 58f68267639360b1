use crate::core::Bus;
use crate::cpu::z80::{Flag, Z80};

impl Z80 {
    // --- Block transfer ---

    /// LDI/LDD/LDIR/LDDR: (DE) <- (HL), both pointers move by `step`,
    /// BC counts down. PV = BC != 0 afterwards, H = N = 0, S/Z/C
    /// preserved. Repeat forms rewind PC over both opcode bytes while
    /// BC != 0, so each pass is its own instruction.
    pub(crate) fn op_block_ld<B: Bus + ?Sized>(&mut self, bus: &mut B, step: i16, repeat: bool) {
        let val = bus.read(self.get_hl());
        bus.write(self.get_de(), val);
        self.set_hl(self.get_hl().wrapping_add(step as u16));
        self.set_de(self.get_de().wrapping_add(step as u16));
        let bc = self.get_bc().wrapping_sub(1);
        self.set_bc(bc);

        let mut f = self.f & (Flag::S as u8 | Flag::Z as u8 | Flag::C as u8);
        if bc != 0 { f |= Flag::PV as u8; }
        self.apply_flags(f);

        if repeat && bc != 0 {
            self.pc = self.pc.wrapping_sub(2);
        }
    }

    /// CPI/CPD/CPIR/CPDR: compare A against (HL). N set, C preserved,
    /// PV = BC != 0 afterwards. Repeat forms also stop on a match.
    pub(crate) fn op_block_cp<B: Bus + ?Sized>(&mut self, bus: &mut B, step: i16, repeat: bool) {
        let val = bus.read(self.get_hl());
        self.set_hl(self.get_hl().wrapping_add(step as u16));
        let bc = self.get_bc().wrapping_sub(1);
        self.set_bc(bc);

        let result = self.a.wrapping_sub(val);
        let mut f = (self.f & Flag::C as u8) | Flag::N as u8;
        if result == 0 { f |= Flag::Z as u8; }
        if (result & 0x80) != 0 { f |= Flag::S as u8; }
        if (self.a & 0xF) < (val & 0xF) { f |= Flag::H as u8; }
        if bc != 0 { f |= Flag::PV as u8; }
        self.apply_flags(f);

        if repeat && bc != 0 && result != 0 {
            self.pc = self.pc.wrapping_sub(2);
        }
    }

    // --- Block I/O ---
    //
    // B is the loop counter for the I/O forms; the port address is C.
    // Flags follow the simplified rule: Z tracks B reaching zero, N
    // set, C preserved.

    /// INI/IND/INIR/INDR: port C into (HL).
    pub(crate) fn op_block_in<B: Bus + ?Sized>(&mut self, bus: &mut B, step: i16, repeat: bool) {
        let val = bus.io_read(self.c);
        bus.write(self.get_hl(), val);
        self.set_hl(self.get_hl().wrapping_add(step as u16));
        self.b = self.b.wrapping_sub(1);
        self.apply_flags(self.block_io_flags());

        if repeat && self.b != 0 {
            self.pc = self.pc.wrapping_sub(2);
        }
    }

    /// OUTI/OUTD/OTIR/OTDR: (HL) out of port C. B drops before the
    /// byte reaches the port.
    pub(crate) fn op_block_out<B: Bus + ?Sized>(&mut self, bus: &mut B, step: i16, repeat: bool) {
        let val = bus.read(self.get_hl());
        self.b = self.b.wrapping_sub(1);
        bus.io_write(self.c, val);
        self.set_hl(self.get_hl().wrapping_add(step as u16));
        self.apply_flags(self.block_io_flags());

        if repeat && self.b != 0 {
            self.pc = self.pc.wrapping_sub(2);
        }
    }

    fn block_io_flags(&self) -> u8 {
        let mut f = (self.f & Flag::C as u8) | Flag::N as u8;
        if self.b == 0 { f |= Flag::Z as u8; }
        f
    }
}
