use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use zet80_core::core::system::{RunExit, System};
use zet80_core::cpu::z80::{StepError, StepEvent, disasm};
use zet80_devices::{load_directory, load_program};

/// Z80 system emulator: load a raw binary, wire up devices, run to HALT.
#[derive(Parser)]
#[command(name = "zet80", version)]
struct Args {
    /// Program image, a raw binary loaded verbatim
    #[arg(long, value_name = "PATH")]
    program: PathBuf,

    /// Load and start address, hexadecimal
    #[arg(long, value_name = "HEX", default_value = "0000")]
    address: String,

    /// Directory of TOML device definitions
    #[arg(long, value_name = "DIR")]
    devices_dir: Option<PathBuf>,

    /// Print one line per executed instruction
    #[arg(long)]
    trace: bool,
}

fn parse_address(text: &str) -> Option<u16> {
    let digits = text
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    u16::from_str_radix(digits, 16).ok()
}

/// Run to an exit condition, printing each retired instruction with its
/// post-execution snapshot. Halted idling and interrupt acceptance do
/// not retire an instruction and print nothing.
fn run_traced(system: &mut System) -> Result<RunExit, StepError> {
    loop {
        if let Some(exit) = system.exit_ready() {
            return Ok(exit);
        }
        let pc = system.cpu.pc;
        let (mnemonic, _) = disasm::disassemble(pc, |addr| system.bus.mem.read(addr));
        let event = system.step()?;
        if matches!(event, StepEvent::Instruction) {
            println!("{pc:04X}  {mnemonic:<18} {}", system.cpu.snapshot());
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(address) = parse_address(&args.address) else {
        eprintln!(
            "invalid address \"{}\": expected hex in 0000..FFFF",
            args.address
        );
        return ExitCode::from(1);
    };

    let mut system = System::new();

    if let Err(e) = load_program(&mut system.bus.mem, &args.program, address) {
        eprintln!("cannot load {}: {e}", args.program.display());
        return ExitCode::from(1);
    }

    if let Some(dir) = &args.devices_dir {
        let line = system.bus.ports.line();
        let devices = match load_directory(dir, &line) {
            Ok(devices) => devices,
            Err(e) => {
                eprintln!("cannot load devices from {}: {e}", dir.display());
                return ExitCode::from(1);
            }
        };
        for device in devices {
            if let Err(e) = system.bus.ports.attach(device) {
                eprintln!("cannot attach device: {e}");
                return ExitCode::from(1);
            }
        }
    }

    system.cpu.pc = address;
    system.bus.ports.start_all();
    let result = if args.trace {
        run_traced(&mut system)
    } else {
        system.run()
    };
    system.bus.ports.stop_all();

    match result {
        Ok(RunExit::Halted) | Ok(RunExit::Stopped) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
