use crate::core::Bus;
use crate::cpu::z80::Z80;

impl Z80 {
    /// Push a word: high byte at SP-1, low byte at SP-2.
    pub(crate) fn push<B: Bus + ?Sized>(&mut self, bus: &mut B, val: u16) {
        self.sp = self.sp.wrapping_sub(1);
        bus.write(self.sp, (val >> 8) as u8);
        self.sp = self.sp.wrapping_sub(1);
        bus.write(self.sp, val as u8);
    }

    /// Pop a word: low byte from SP, high byte from SP+1.
    pub(crate) fn pop<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read(self.sp) as u16;
        self.sp = self.sp.wrapping_add(1);
        let hi = bus.read(self.sp) as u16;
        self.sp = self.sp.wrapping_add(1);
        (hi << 8) | lo
    }

    /// PUSH rr
    /// Opcode mask: 11 rr0 101 (rr: 0=BC, 1=DE, 2=HL/IX/IY, 3=AF)
    pub(crate) fn op_push_rr<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8) {
        let rp = (opcode >> 4) & 0x03;
        let val = self.get_rp_af(rp);
        self.push(bus, val);
    }

    /// POP rr
    /// Opcode mask: 11 rr0 001
    pub(crate) fn op_pop_rr<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8) {
        let rp = (opcode >> 4) & 0x03;
        let val = self.pop(bus);
        self.set_rp_af(rp, val);
    }
}
