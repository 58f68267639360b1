use zet80_core::cpu::z80::Z80;
mod common;
use common::TestBus;

fn step(cpu: &mut Z80, bus: &mut TestBus) {
    cpu.step(bus).unwrap();
}

// --- Block copies ---

#[test]
fn test_ldi() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.set_hl(0x4000);
    cpu.set_de(0x5000);
    cpu.set_bc(0x0002);
    cpu.f = 0x41; // Z and C set, both must survive
    bus.load(0, &[0xED, 0xA0]); // LDI
    bus.load(0x4000, &[0xAA]);

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x5000], 0xAA);
    assert_eq!(cpu.get_hl(), 0x4001);
    assert_eq!(cpu.get_de(), 0x5001);
    assert_eq!(cpu.get_bc(), 0x0001);
    assert_ne!(cpu.f & 0x04, 0, "PV set while BC is non-zero");
    assert_ne!(cpu.f & 0x40, 0, "Z preserved");
    assert_ne!(cpu.f & 0x01, 0, "C preserved");
    assert_eq!(cpu.f & 0x12, 0, "H and N cleared");
}

#[test]
fn test_ldi_last_iteration_clears_pv() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.set_hl(0x4000);
    cpu.set_de(0x5000);
    cpu.set_bc(0x0001);
    bus.load(0, &[0xED, 0xA0]); // LDI

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.get_bc(), 0x0000);
    assert_eq!(cpu.f & 0x04, 0, "PV clear once BC reaches zero");
}

#[test]
fn test_ldd() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.set_hl(0x4002);
    cpu.set_de(0x5002);
    cpu.set_bc(0x0003);
    bus.load(0, &[0xED, 0xA8]); // LDD
    bus.load(0x4002, &[0xBB]);

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x5002], 0xBB);
    assert_eq!(cpu.get_hl(), 0x4001);
    assert_eq!(cpu.get_de(), 0x5001);
    assert_eq!(cpu.get_bc(), 0x0002);
}

#[test]
fn test_ldir_copies_whole_block() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.set_hl(0x4000);
    cpu.set_de(0x5000);
    cpu.set_bc(0x0003);
    bus.load(0, &[0xED, 0xB0, 0x76]); // LDIR; HALT
    bus.load(0x4000, &[0x01, 0x02, 0x03]);

    // Each step performs one transfer and rewinds until BC is spent.
    while !cpu.halted {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(&bus.memory[0x5000..0x5003], &[0x01, 0x02, 0x03]);
    assert_eq!(cpu.get_bc(), 0x0000);
    assert_eq!(cpu.get_hl(), 0x4003);
    assert_eq!(cpu.get_de(), 0x5003);
}

#[test]
fn test_ldir_then_lddr_round_trip() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.set_hl(0x4000);
    cpu.set_de(0x5000);
    cpu.set_bc(0x0003);
    bus.load(0, &[0xED, 0xB0]); // LDIR
    bus.load(2, &[0xED, 0xB8, 0x76]); // LDDR; HALT
    bus.load(0x4000, &[0x11, 0x22, 0x33]);

    while cpu.pc < 2 {
        step(&mut cpu, &mut bus);
    }
    // Copy the block back over itself, descending from the last byte.
    cpu.set_hl(0x5002);
    cpu.set_de(0x6002);
    cpu.set_bc(0x0003);
    while !cpu.halted {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(&bus.memory[0x6000..0x6003], &[0x11, 0x22, 0x33]);
    assert_eq!(cpu.get_hl(), 0x4FFF);
    assert_eq!(cpu.get_de(), 0x5FFF);
}

// --- Block compares ---

#[test]
fn test_cpi() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.a = 0x42;
    cpu.set_hl(0x4000);
    cpu.set_bc(0x0002);
    cpu.f = 0x01; // C must survive
    bus.load(0, &[0xED, 0xA1]); // CPI
    bus.load(0x4000, &[0x42]);

    step(&mut cpu, &mut bus);
    assert_ne!(cpu.f & 0x40, 0, "Z set on match");
    assert_ne!(cpu.f & 0x02, 0, "N set");
    assert_ne!(cpu.f & 0x01, 0, "C preserved");
    assert_ne!(cpu.f & 0x04, 0, "PV set while BC non-zero");
    assert_eq!(cpu.get_hl(), 0x4001);
    assert_eq!(cpu.get_bc(), 0x0001);
    assert_eq!(cpu.a, 0x42, "compare does not modify A");
}

#[test]
fn test_cpir_stops_on_match() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.a = 0x33;
    cpu.set_hl(0x4000);
    cpu.set_bc(0x0005);
    bus.load(0, &[0xED, 0xB1, 0x76]); // CPIR; HALT
    bus.load(0x4000, &[0x11, 0x22, 0x33, 0x44, 0x55]);

    while !cpu.halted {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.get_hl(), 0x4003, "HL points past the match");
    assert_eq!(cpu.get_bc(), 0x0002);
    assert_ne!(cpu.f & 0x40, 0, "Z set on the matching byte");
}

#[test]
fn test_cpdr_exhausts_without_match() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.a = 0xFF;
    cpu.set_hl(0x4002);
    cpu.set_bc(0x0003);
    bus.load(0, &[0xED, 0xB9, 0x76]); // CPDR; HALT
    bus.load(0x4000, &[0x01, 0x02, 0x03]);

    while !cpu.halted {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.get_bc(), 0x0000);
    assert_eq!(cpu.f & 0x40, 0, "no match seen");
    assert_eq!(cpu.f & 0x04, 0, "PV clear, count exhausted");
}

// --- Block IO ---

#[test]
fn test_ini() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.b = 0x02;
    cpu.c = 0x10;
    cpu.set_hl(0x4000);
    cpu.f = 0x01; // C must survive
    bus.ports_in[0x10] = 0x7E;
    bus.load(0, &[0xED, 0xA2]); // INI

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x4000], 0x7E);
    assert_eq!(cpu.get_hl(), 0x4001);
    assert_eq!(cpu.b, 0x01);
    assert_eq!(cpu.f & 0x40, 0, "Z clear while B non-zero");
    assert_ne!(cpu.f & 0x02, 0, "N set");
    assert_ne!(cpu.f & 0x01, 0, "C preserved");
}

#[test]
fn test_inir_fills_buffer() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.b = 0x03;
    cpu.c = 0x20;
    cpu.set_hl(0x4000);
    bus.ports_in[0x20] = 0x99;
    bus.load(0, &[0xED, 0xB2, 0x76]); // INIR; HALT

    while !cpu.halted {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(&bus.memory[0x4000..0x4003], &[0x99, 0x99, 0x99]);
    assert_eq!(cpu.b, 0x00);
    assert_ne!(cpu.f & 0x40, 0, "Z set when B reaches zero");
}

#[test]
fn test_outi() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.b = 0x02;
    cpu.c = 0x30;
    cpu.set_hl(0x4000);
    bus.load(0, &[0xED, 0xA3]); // OUTI
    bus.load(0x4000, &[0x5C]);

    step(&mut cpu, &mut bus);
    assert_eq!(bus.ports_out, vec![(0x30, 0x5C)]);
    assert_eq!(cpu.get_hl(), 0x4001);
    assert_eq!(cpu.b, 0x01);
}

#[test]
fn test_otir_drains_buffer() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.b = 0x03;
    cpu.c = 0x40;
    cpu.set_hl(0x4000);
    bus.load(0, &[0xED, 0xB3, 0x76]); // OTIR; HALT
    bus.load(0x4000, &[0x0A, 0x0B, 0x0C]);

    while !cpu.halted {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(
        bus.ports_out,
        vec![(0x40, 0x0A), (0x40, 0x0B), (0x40, 0x0C)]
    );
    assert_eq!(cpu.b, 0x00);
}

#[test]
fn test_outd_descends() {
    let mut cpu = Z80::new();
    let mut bus = TestBus::new();
    cpu.b = 0x01;
    cpu.c = 0x50;
    cpu.set_hl(0x4002);
    bus.load(0, &[0xED, 0xAB]); // OUTD
    bus.load(0x4002, &[0xEE]);

    step(&mut cpu, &mut bus);
    assert_eq!(bus.ports_out, vec![(0x50, 0xEE)]);
    assert_eq!(cpu.get_hl(), 0x4001);
    assert_ne!(cpu.f & 0x40, 0, "Z set, B hit zero");
}
