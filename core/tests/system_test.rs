use zet80_core::core::port::{Device, PortBus, PortError};
use zet80_core::core::system::{RunExit, System};
use zet80_core::cpu::z80::StepError;

/// Scripted device: serves bytes from a queue, records what it is sent.
struct Probe {
    port: u8,
    input: Vec<u8>,
    output: Vec<u8>,
    started: bool,
    stopped: bool,
}

impl Probe {
    fn new(port: u8, input: &[u8]) -> Self {
        Self {
            port,
            input: input.to_vec(),
            output: Vec::new(),
            started: false,
            stopped: false,
        }
    }
}

impl Device for Probe {
    fn address(&self) -> u8 {
        self.port
    }

    fn start(&mut self) {
        self.started = true;
    }

    fn stop(&mut self) {
        self.stopped = true;
    }

    fn read(&mut self) -> u8 {
        if self.input.is_empty() {
            0xFF
        } else {
            self.input.remove(0)
        }
    }

    fn write(&mut self, data: u8) {
        self.output.push(data);
    }
}

// --- Port map ---

#[test]
fn test_unmapped_ports_float_high() {
    let mut ports = PortBus::new();
    assert_eq!(ports.read(0x00), 0xFF);
    assert_eq!(ports.read(0xFE), 0xFF);
    ports.write(0x10, 0x42); // swallowed
}

#[test]
fn test_attach_routes_reads_and_writes() {
    let mut ports = PortBus::new();
    ports.attach(Box::new(Probe::new(0x10, &[0x11, 0x22]))).unwrap();

    assert!(ports.is_attached(0x10));
    assert!(!ports.is_attached(0x11));
    assert_eq!(ports.read(0x10), 0x11);
    assert_eq!(ports.read(0x10), 0x22);
    assert_eq!(ports.read(0x10), 0xFF, "exhausted queue floats high");
    ports.write(0x10, 0x99);
}

#[test]
fn test_attach_rejects_port_collision() {
    let mut ports = PortBus::new();
    ports.attach(Box::new(Probe::new(0x20, &[]))).unwrap();

    let err = ports.attach(Box::new(Probe::new(0x20, &[]))).unwrap_err();
    assert_eq!(err, PortError::AddressInUse { port: 0x20 });
    assert_eq!(
        err.to_string(),
        "port 0x20 already has a device attached"
    );
}

#[test]
fn test_interrupt_line_latches_until_ack() {
    let ports = PortBus::new();
    let line = ports.line();

    assert!(!ports.irq_pending());
    line.raise_irq(0xEF);
    assert!(ports.irq_pending());

    let state = ports.interrupts();
    assert!(state.irq);
    assert_eq!(state.data, 0xEF);
    assert!(ports.interrupts().irq, "sampling does not consume");

    ports.ack_irq();
    assert!(!ports.irq_pending());
}

#[test]
fn test_nmi_line_is_level() {
    let ports = PortBus::new();
    let line = ports.line();

    line.set_nmi(true);
    assert!(ports.interrupts().nmi);
    line.set_nmi(false);
    assert!(!ports.interrupts().nmi);
}

// --- System run loop ---

#[test]
fn test_run_exits_on_dead_halt() {
    let mut system = System::new();
    system
        .bus
        .mem
        .load(0, &[0x3E, 0x07, 0x76]) // LD A, 7; HALT
        .unwrap();

    let exit = system.run().unwrap();
    assert_eq!(exit, RunExit::Halted);
    assert_eq!(system.cpu.a, 0x07);
    assert!(system.cpu.halted);
}

#[test]
fn test_halt_with_interrupts_enabled_keeps_idling() {
    let mut system = System::new();
    system
        .bus
        .mem
        .load(0, &[0xFB, 0x76]) // EI; HALT
        .unwrap();

    // EI, HALT, then idle NOPs: never a Halted exit while IFF1 is up.
    for _ in 0..5 {
        system.step().unwrap();
    }
    assert!(system.cpu.halted);
    assert_eq!(system.exit_ready(), None);
}

#[test]
fn test_interrupt_resumes_enabled_halt() {
    let mut system = System::new();
    system.cpu.im = 1;
    system
        .bus
        .mem
        .load(0, &[0xFB, 0x76]) // EI; HALT
        .unwrap();
    // IM 1 handler: bump A, disable, halt for good.
    system
        .bus
        .mem
        .load(0x0038, &[0x3C, 0xF3, 0x76]) // INC A; DI; HALT
        .unwrap();
    system.cpu.a = 0x00;

    let line = system.bus.ports.line();
    system.step().unwrap(); // EI
    system.step().unwrap(); // HALT
    line.raise_irq(0xFF);

    let exit = system.run().unwrap();
    assert_eq!(exit, RunExit::Halted);
    assert_eq!(system.cpu.a, 0x01, "handler ran");
}

#[test]
fn test_stop_handle_breaks_a_spin() {
    let mut system = System::new();
    system
        .bus
        .mem
        .load(0, &[0xC3, 0x00, 0x00]) // JP 0x0000 forever
        .unwrap();

    let handle = system.stop_handle();
    handle.stop();

    let exit = system.run().unwrap();
    assert_eq!(exit, RunExit::Stopped);
}

#[test]
fn test_run_surfaces_unknown_opcode() {
    let mut system = System::new();
    system.bus.mem.load(0, &[0xDD, 0xDD]).unwrap();

    let err = system.run().unwrap_err();
    assert!(matches!(err, StepError::UnknownOpcode { pc: 0, .. }));
}

#[test]
fn test_cpu_program_drives_devices() {
    let mut system = System::new();
    system
        .bus
        .ports
        .attach(Box::new(Probe::new(0x10, &[0x2A])))
        .unwrap();
    system
        .bus
        .mem
        .load(
            0,
            &[
                0xDB, 0x10, // IN A, (0x10)
                0x3C, // INC A
                0xD3, 0x10, // OUT (0x10), A
                0x76, // HALT
            ],
        )
        .unwrap();

    system.run().unwrap();
    assert_eq!(system.cpu.a, 0x2B);
}
