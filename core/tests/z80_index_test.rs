use zet80_core::cpu::z80::Z80;
mod common;
use common::TestBus;

fn step(cpu: &mut Z80, bus: &mut TestBus) {
    cpu.step(bus).unwrap();
}

// --- IX/IY as 16-bit registers ---

#[test]
fn test_ld_ix_nn() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0xDD, 0x21, 0x34, 0x12]); // LD IX, 0x1234

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ix, 0x1234);
    assert_eq!(cpu.pc, 4);
}

#[test]
fn test_ld_iy_nn() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0xFD, 0x21, 0x78, 0x56]); // LD IY, 0x5678

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.iy, 0x5678);
}

#[test]
fn test_add_ix_bc() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x1000;
    cpu.set_bc(0x0234);
    cpu.f = 0x00;
    bus.load(0, &[0xDD, 0x09]); // ADD IX, BC

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ix, 0x1234);
    assert_eq!(cpu.get_hl(), 0x0000, "HL is not involved");
}

#[test]
fn test_add_ix_ix() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x8000;
    cpu.f = 0x00;
    bus.load(0, &[0xDD, 0x29]); // ADD IX, IX

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ix, 0x0000);
    assert_ne!(cpu.f & 0x01, 0, "carry out of bit 15");
}

#[test]
fn test_push_pop_ix() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.sp = 0xFFFE;
    cpu.ix = 0xCAFE;
    bus.load(0, &[0xDD, 0xE5, 0xDD, 0xE1]); // PUSH IX; POP IX

    step(&mut cpu, &mut bus);
    cpu.ix = 0x0000;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ix, 0xCAFE);
}

#[test]
fn test_jp_ix() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x4321;
    bus.load(0, &[0xDD, 0xE9]); // JP (IX)

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.pc, 0x4321);
}

#[test]
fn test_ld_sp_iy() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.iy = 0x9000;
    bus.load(0, &[0xFD, 0xF9]); // LD SP, IY

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.sp, 0x9000);
}

// --- Displaced memory operands ---

#[test]
fn test_ld_r_ix_d() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x4000;
    bus.load(0, &[0xDD, 0x46, 0x05]); // LD B, (IX+5)
    bus.load(0x4005, &[0x99]);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.b, 0x99);
    assert_eq!(cpu.pc, 3);
}

#[test]
fn test_ld_ix_d_r() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x4000;
    cpu.c = 0x77;
    bus.load(0, &[0xDD, 0x71, 0x10]); // LD (IX+0x10), C

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x4010], 0x77);
}

#[test]
fn test_negative_displacement() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.iy = 0x4000;
    bus.load(0, &[0xFD, 0x7E, 0xFD]); // LD A, (IY-3)
    bus.load(0x3FFD, &[0x42]);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.a, 0x42);
}

#[test]
fn test_ld_ix_d_n() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x5000;
    bus.load(0, &[0xDD, 0x36, 0x02, 0xAB]); // LD (IX+2), 0xAB

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x5002], 0xAB);
    assert_eq!(cpu.pc, 4, "displacement comes before the immediate");
}

#[test]
fn test_inc_ix_d() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x5000;
    cpu.f = 0x01; // C must survive INC
    bus.load(0, &[0xDD, 0x34, 0x01]); // INC (IX+1)
    bus.load(0x5001, &[0x7F]);

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x5001], 0x80);
    assert_ne!(cpu.f & 0x04, 0, "V on 7F->80");
    assert_ne!(cpu.f & 0x01, 0, "C preserved");
}

#[test]
fn test_add_a_ix_d() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.a = 0x10;
    cpu.ix = 0x5000;
    cpu.f = 0x00;
    bus.load(0, &[0xDD, 0x86, 0x03]); // ADD A, (IX+3)
    bus.load(0x5003, &[0x22]);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.a, 0x32);
}

#[test]
fn test_indexed_ld_keeps_plain_source() {
    // LD (IX+d), H uses the real H, not IXH.
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x4000;
    cpu.h = 0x5A;
    bus.load(0, &[0xDD, 0x74, 0x00]); // LD (IX+0), H

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x4000], 0x5A);
}

#[test]
fn test_indexed_ld_keeps_plain_dest() {
    // LD L, (IY+d) writes the real L, not IYL.
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.iy = 0x4100;
    bus.load(0, &[0xFD, 0x6E, 0x00]); // LD L, (IY+0)
    bus.load(0x4100, &[0x3C]);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.l, 0x3C);
    assert_eq!(cpu.iy, 0x4100, "IYL untouched");
}

// --- Index register halves ---

#[test]
fn test_ld_ixh_n() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x0034;
    bus.load(0, &[0xDD, 0x26, 0x12]); // LD IXH, 0x12

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ix, 0x1234);
}

#[test]
fn test_ld_a_ixl() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x1234;
    bus.load(0, &[0xDD, 0x7D]); // LD A, IXL

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.a, 0x34);
}

#[test]
fn test_add_a_iyh() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.a = 0x01;
    cpu.iy = 0x4000;
    cpu.f = 0x00;
    bus.load(0, &[0xFD, 0x84]); // ADD A, IYH

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.a, 0x41);
}

#[test]
fn test_inc_ixl() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x12FF;
    cpu.f = 0x00;
    bus.load(0, &[0xDD, 0x2C]); // INC IXL

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ix, 0x1200, "only the low half wraps");
    assert_ne!(cpu.f & 0x40, 0, "Z from the half");
}

#[test]
fn test_ld_ixh_ixl() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x12AB;
    bus.load(0, &[0xDD, 0x65]); // LD IXH, IXL

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ix, 0xABAB);
}

// --- DD CB displaced bit operations ---

#[test]
fn test_ddcb_rlc_memory() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x4000;
    cpu.f = 0x00;
    bus.load(0, &[0xDD, 0xCB, 0x05, 0x06]); // RLC (IX+5)
    bus.load(0x4005, &[0x80]);

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x4005], 0x01);
    assert_ne!(cpu.f & 0x01, 0);
    assert_eq!(cpu.pc, 4);
}

#[test]
fn test_ddcb_rlc_copies_to_register() {
    // Undocumented form: result also lands in the plain register.
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x4000;
    cpu.b = 0x00;
    bus.load(0, &[0xDD, 0xCB, 0x05, 0x00]); // RLC (IX+5), B
    bus.load(0x4005, &[0x80]);

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x4005], 0x01, "memory gets the result");
    assert_eq!(cpu.b, 0x01, "and so does B");
}

#[test]
fn test_ddcb_bit() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.iy = 0x4000;
    cpu.f = 0x00;
    bus.load(0, &[0xFD, 0xCB, 0xFE, 0x7E]); // BIT 7, (IY-2)
    bus.load(0x3FFE, &[0x80]);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.f & 0x40, 0, "bit is set");
    assert_ne!(cpu.f & 0x80, 0, "S for bit 7");
    assert_eq!(bus.memory[0x3FFE], 0x80, "BIT never writes");
}

#[test]
fn test_ddcb_set_res_memory() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x4000;
    bus.load(
        0,
        &[
            0xDD, 0xCB, 0x00, 0xC6, // SET 0, (IX+0)
            0xDD, 0xCB, 0x00, 0x86, // RES 0, (IX+0)
        ],
    );

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x4000], 0x01);

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x4000], 0x00);
}

#[test]
fn test_plain_cb_ignores_index_halves() {
    // CB without DD/FD works on the real register set even right after
    // an indexed instruction.
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.ix = 0xFFFF;
    cpu.h = 0x01;
    cpu.f = 0x00;
    bus.load(0, &[0xCB, 0x3C]); // SRL H

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.h, 0x00);
    assert_eq!(cpu.ix, 0xFFFF, "IX untouched by plain CB");
}
