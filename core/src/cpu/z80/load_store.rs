use crate::core::Bus;
use crate::cpu::z80::{Flag, Z80};

impl Z80 {
    // --- 8-bit loads ---

    /// LD r, r' / LD r, (HL) / LD (HL), r
    /// Opcode mask: 01 ddd sss
    /// The register on the far side of a memory operand uses the plain
    /// table: LD B, (IX+d) loads B, never IXH. Register-to-register
    /// forms substitute the index halves on both sides.
    pub(crate) fn op_ld_r_r<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8, disp: Option<i8>) {
        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        if src == 6 {
            let val = bus.read(self.index_addr(disp));
            self.set_reg8(dst, val);
        } else if dst == 6 {
            let val = self.get_reg8(src);
            bus.write(self.index_addr(disp), val);
        } else {
            let val = self.get_reg8_ix(src);
            self.set_reg8_ix(dst, val);
        }
    }

    /// LD r, n / LD (HL), n
    /// Opcode mask: 00 rrr 110
    pub(crate) fn op_ld_r_n<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        opcode: u8,
        val: u8,
        disp: Option<i8>,
    ) {
        let dst = (opcode >> 3) & 0x07;
        if dst == 6 {
            bus.write(self.index_addr(disp), val);
        } else {
            self.set_reg8_ix(dst, val);
        }
    }

    /// LD A, (BC)
    pub(crate) fn op_ld_a_bc<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.a = bus.read(self.get_bc());
    }

    /// LD A, (DE)
    pub(crate) fn op_ld_a_de<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.a = bus.read(self.get_de());
    }

    /// LD (BC), A
    pub(crate) fn op_ld_bc_a<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        bus.write(self.get_bc(), self.a);
    }

    /// LD (DE), A
    pub(crate) fn op_ld_de_a<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        bus.write(self.get_de(), self.a);
    }

    /// LD A, (nn)
    pub(crate) fn op_ld_a_nn<B: Bus + ?Sized>(&mut self, bus: &mut B, addr: u16) {
        self.a = bus.read(addr);
    }

    /// LD (nn), A
    pub(crate) fn op_ld_nn_a<B: Bus + ?Sized>(&mut self, bus: &mut B, addr: u16) {
        bus.write(addr, self.a);
    }

    // --- 16-bit loads ---

    /// LD rr, nn
    /// Opcode mask: 00 rr0 001
    pub(crate) fn op_ld_rr_nn(&mut self, opcode: u8, val: u16) {
        let rp = (opcode >> 4) & 0x03;
        self.set_rp(rp, val);
    }

    /// LD (nn), HL: low byte first
    pub(crate) fn op_ld_nn_hl<B: Bus + ?Sized>(&mut self, bus: &mut B, addr: u16) {
        let val = self.get_rp(2);
        bus.write(addr, val as u8);
        bus.write(addr.wrapping_add(1), (val >> 8) as u8);
    }

    /// LD HL, (nn)
    pub(crate) fn op_ld_hl_nn_ind<B: Bus + ?Sized>(&mut self, bus: &mut B, addr: u16) {
        let lo = bus.read(addr) as u16;
        let hi = bus.read(addr.wrapping_add(1)) as u16;
        self.set_rp(2, (hi << 8) | lo);
    }

    /// LD SP, HL
    pub(crate) fn op_ld_sp_hl(&mut self) {
        self.sp = self.get_rp(2);
    }

    /// LD (nn), rr: ED 01 rr0 011
    pub(crate) fn op_ld_nn_rr_ed<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8, addr: u16) {
        let rp = (opcode >> 4) & 0x03;
        let val = self.get_rp(rp);
        bus.write(addr, val as u8);
        bus.write(addr.wrapping_add(1), (val >> 8) as u8);
    }

    /// LD rr, (nn): ED 01 rr1 011
    pub(crate) fn op_ld_rr_nn_ed<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u8, addr: u16) {
        let rp = (opcode >> 4) & 0x03;
        let lo = bus.read(addr) as u16;
        let hi = bus.read(addr.wrapping_add(1)) as u16;
        self.set_rp(rp, (hi << 8) | lo);
    }

    // --- Exchanges ---

    /// EX AF, AF'
    pub(crate) fn op_ex_af_af(&mut self) {
        std::mem::swap(&mut self.a, &mut self.a_prime);
        std::mem::swap(&mut self.f, &mut self.f_prime);
    }

    /// EXX: swap BC, DE, HL with their shadows in one go.
    pub(crate) fn op_exx(&mut self) {
        std::mem::swap(&mut self.b, &mut self.b_prime);
        std::mem::swap(&mut self.c, &mut self.c_prime);
        std::mem::swap(&mut self.d, &mut self.d_prime);
        std::mem::swap(&mut self.e, &mut self.e_prime);
        std::mem::swap(&mut self.h, &mut self.h_prime);
        std::mem::swap(&mut self.l, &mut self.l_prime);
    }

    /// EX DE, HL: always DE and HL proper, even under DD/FD.
    pub(crate) fn op_ex_de_hl(&mut self) {
        std::mem::swap(&mut self.d, &mut self.h);
        std::mem::swap(&mut self.e, &mut self.l);
    }

    /// EX (SP), HL: swap HL (IX/IY under a prefix) with the word on
    /// top of the stack.
    pub(crate) fn op_ex_sp_hl<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let sp = self.sp;
        let lo = bus.read(sp);
        let hi = bus.read(sp.wrapping_add(1));
        let cur = self.get_rp(2);
        bus.write(sp, cur as u8);
        bus.write(sp.wrapping_add(1), (cur >> 8) as u8);
        self.set_rp(2, ((hi as u16) << 8) | lo as u16);
    }

    // --- Interrupt register transfers ---

    /// LD I, A: no flags
    pub(crate) fn op_ld_i_a(&mut self) {
        self.i = self.a;
    }

    /// LD R, A: the one way to set bit 7 of R
    pub(crate) fn op_ld_r_a(&mut self) {
        self.r = self.a;
    }

    /// LD A, I: S/Z from the value, H = N = 0, PV = IFF2, C preserved.
    pub(crate) fn op_ld_a_i(&mut self) {
        self.a = self.i;
        self.apply_flags(self.ir_transfer_flags(self.a));
    }

    /// LD A, R: same flag rule as LD A, I.
    pub(crate) fn op_ld_a_r(&mut self) {
        self.a = self.r;
        self.apply_flags(self.ir_transfer_flags(self.a));
    }

    fn ir_transfer_flags(&self, val: u8) -> u8 {
        let mut f = self.f & Flag::C as u8;
        if val == 0 { f |= Flag::Z as u8; }
        if (val & 0x80) != 0 { f |= Flag::S as u8; }
        if self.iff2 { f |= Flag::PV as u8; }
        f
    }
}
