//! Periodic interrupt source.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::thread;
use std::time::Duration;

use zet80_core::core::{Device, IntLine};

use crate::manifest::{DeviceDef, DeviceError};
use crate::registry::DeviceEntry;

/// Granularity of the worker's stop-flag checks.
const POLL_MS: u64 = 5;

/// Timer device: a worker thread raises the maskable line every
/// `period_ms` milliseconds, driving `vector` during acceptance. Reads
/// return the pulse count so far (mod 256); any write resets it.
pub struct Pulse {
    port: u8,
    period_ms: u64,
    vector: u8,
    line: IntLine,
    count: Arc<AtomicU8>,
    quit: Arc<AtomicBool>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Pulse {
    pub fn new(port: u8, period_ms: u64, vector: u8, line: IntLine) -> Self {
        Self {
            port,
            period_ms,
            vector,
            line,
            count: Arc::new(AtomicU8::new(0)),
            quit: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }
}

impl Device for Pulse {
    fn address(&self) -> u8 {
        self.port
    }

    fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }
        self.quit.store(false, Ordering::SeqCst);
        let period = Duration::from_millis(self.period_ms);
        let poll = Duration::from_millis(POLL_MS).min(period);
        let vector = self.vector;
        let line = self.line.clone();
        let count = self.count.clone();
        let quit = self.quit.clone();
        self.worker = Some(thread::spawn(move || {
            // Sleep in short slices so a stop request never waits out a
            // whole period.
            let mut waited = Duration::ZERO;
            while !quit.load(Ordering::SeqCst) {
                thread::sleep(poll);
                waited += poll;
                if waited >= period {
                    waited = Duration::ZERO;
                    count.fetch_add(1, Ordering::SeqCst);
                    line.raise_irq(vector);
                }
            }
        }));
    }

    fn stop(&mut self) {
        self.quit.store(true, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

    fn read(&mut self) -> u8 {
        self.count.load(Ordering::SeqCst)
    }

    fn write(&mut self, _data: u8) {
        self.count.store(0, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Device registry
// ---------------------------------------------------------------------------

fn create(def: &DeviceDef, line: IntLine) -> Result<Box<dyn Device>, DeviceError> {
    let period_ms = match def.period_ms {
        Some(ms) if ms > 0 => ms,
        Some(_) => {
            return Err(DeviceError::BadValue {
                kind: def.kind.clone(),
                message: "period-ms must be at least 1".to_string(),
            });
        }
        None => {
            return Err(DeviceError::BadValue {
                kind: def.kind.clone(),
                message: "period-ms is required".to_string(),
            });
        }
    };
    Ok(Box::new(Pulse::new(
        def.port,
        period_ms,
        def.vector.unwrap_or(0xFF),
        line,
    )))
}

inventory::submit! {
    DeviceEntry::new("pulse", create)
}
