//! Threaded byte source, standard input by default.

use std::io::Read;
use std::sync::mpsc;
use std::thread;

use zet80_core::core::{Device, IntLine};

use crate::manifest::{DeviceDef, DeviceError};
use crate::registry::DeviceEntry;

/// Input port backed by a worker thread. The worker blocks on its reader
/// and queues every byte it gets; `read` pops the queue and returns 0xFF
/// when it is empty. With a `vector` configured, the worker raises the
/// maskable line as each byte arrives, driving the vector during
/// acceptance.
pub struct Keyboard {
    port: u8,
    vector: Option<u8>,
    line: IntLine,
    source: Option<Box<dyn Read + Send>>,
    queue: Option<mpsc::Receiver<u8>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Keyboard {
    pub fn new(port: u8, vector: Option<u8>, line: IntLine) -> Self {
        Self::with_reader(port, vector, line, Box::new(std::io::stdin()))
    }

    /// Create a keyboard fed from any reader (for testing).
    pub fn with_reader(
        port: u8,
        vector: Option<u8>,
        line: IntLine,
        source: Box<dyn Read + Send>,
    ) -> Self {
        Self {
            port,
            vector,
            line,
            source: Some(source),
            queue: None,
            worker: None,
        }
    }
}

impl Device for Keyboard {
    fn address(&self) -> u8 {
        self.port
    }

    fn start(&mut self) {
        let Some(mut source) = self.source.take() else {
            return;
        };
        let (tx, rx) = mpsc::channel();
        let vector = self.vector;
        let line = self.line.clone();
        self.queue = Some(rx);
        self.worker = Some(thread::spawn(move || {
            let mut buf = [0u8; 1];
            loop {
                match source.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {
                        if tx.send(buf[0]).is_err() {
                            break;
                        }
                        if let Some(vector) = vector {
                            line.raise_irq(vector);
                        }
                    }
                }
            }
        }));
    }

    fn stop(&mut self) {
        // Dropping the receiver ends a worker with input still queued at
        // its next send. One parked inside `read` cannot be unblocked
        // portably and is detached instead of joined.
        self.queue = None;
        if let Some(worker) = self.worker.take() {
            if worker.is_finished() {
                let _ = worker.join();
            }
        }
    }

    fn read(&mut self) -> u8 {
        match &self.queue {
            Some(queue) => queue.try_recv().unwrap_or(0xFF),
            None => 0xFF,
        }
    }

    fn write(&mut self, _data: u8) {}
}

// ---------------------------------------------------------------------------
// Device registry
// ---------------------------------------------------------------------------

fn create(def: &DeviceDef, line: IntLine) -> Result<Box<dyn Device>, DeviceError> {
    Ok(Box::new(Keyboard::new(def.port, def.vector, line)))
}

inventory::submit! {
    DeviceEntry::new("keyboard", create)
}
