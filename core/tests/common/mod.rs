use zet80_core::core::{Bus, InterruptState};

/// Minimal bus for testing: flat 64KB memory, a 256-slot input port
/// latch, an output log, and hand-cranked interrupt lines.
pub struct TestBus {
    pub memory: [u8; 0x10000],
    pub ports_in: [u8; 256],
    pub ports_out: Vec<(u8, u8)>,
    pub irq: bool,
    pub irq_data: u8,
    pub nmi: bool,
    pub acks: u32,
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
            ports_in: [0xFF; 256],
            ports_out: Vec::new(),
            irq: false,
            irq_data: 0xFF,
            nmi: false,
            acks: 0,
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }
}

impl Bus for TestBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
    }

    fn io_read(&mut self, port: u8) -> u8 {
        self.ports_in[port as usize]
    }

    fn io_write(&mut self, port: u8, data: u8) {
        self.ports_out.push((port, data));
    }

    fn check_interrupts(&mut self) -> InterruptState {
        InterruptState {
            nmi: self.nmi,
            irq: self.irq,
            data: self.irq_data,
        }
    }

    fn ack_irq(&mut self) {
        self.irq = false;
        self.acks += 1;
    }
}
