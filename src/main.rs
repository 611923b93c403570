//! Interactive 6502 emulator front end.
//!
//! By default this opens a terminal UI for stepping through a program. With
//! `--headless` it instead runs the program to its halt loop under a cycle
//! budget and prints the final machine state, which is how the built-in
//! verification programs are checked from the command line:
//!
//! ```bash
//! # Step through a raw binary interactively
//! emu6502 path/to/program.bin
//!
//! # Run a built-in program without the UI
//! emu6502 --program factorial --headless
//! ```

mod tui;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use emu6502::harness::{RunOutcome, Runner};
use emu6502::programs::{self, LOAD_ADDRESS, RESULT_ADDRESS};
use emu6502::{Cpu, FlatMemory, MemoryBus};

/// MOS 6502 emulator
#[derive(Parser, Debug)]
#[command(name = "emu6502")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw binary file loaded at $8000 (optional)
    binary: Option<PathBuf>,

    /// Load a built-in program instead: factorial, fibonacci or multiply
    #[arg(long, conflicts_with = "binary")]
    program: Option<String>,

    /// Run to completion without the UI and print the final state
    #[arg(long)]
    headless: bool,

    /// Cycle budget for headless runs
    #[arg(long, default_value = "1000000")]
    cycle_limit: u64,

    /// Delay between instructions in the UI's free-run mode, in milliseconds
    #[arg(long, default_value = "50")]
    run_delay_ms: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let image = load_image(&args)?;
    let expected = args
        .program
        .as_deref()
        .and_then(programs::builtin)
        .map(|p| p.expected);

    if args.headless {
        // The TUI owns the terminal, so logging is only wired up here.
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
        return run_headless(&image, args.cycle_limit, expected);
    }

    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, (LOAD_ADDRESS & 0xFF) as u8);
    memory.write(0xFFFD, (LOAD_ADDRESS >> 8) as u8);
    for (i, byte) in image.iter().enumerate() {
        memory.write(LOAD_ADDRESS + i as u16, *byte);
    }

    let cpu = Cpu::new(memory);
    tui::run(cpu, Duration::from_millis(args.run_delay_ms))
}

/// Resolves the program image from the command line: a raw binary file, a
/// built-in program, or nothing (empty memory).
fn load_image(args: &Args) -> Result<Vec<u8>> {
    if let Some(path) = &args.binary {
        return fs::read(path).with_context(|| format!("failed to read {}", path.display()));
    }
    if let Some(name) = &args.program {
        let program = programs::builtin(name)
            .ok_or_else(|| anyhow!("unknown program {name:?}; try factorial, fibonacci or multiply"))?;
        return Ok(program.code.to_vec());
    }
    Ok(Vec::new())
}

fn run_headless(image: &[u8], cycle_limit: u64, expected: Option<u8>) -> Result<()> {
    if image.is_empty() {
        bail!("headless mode needs a binary file or --program");
    }

    let mut runner = Runner::load_image(image, LOAD_ADDRESS)?;
    let RunOutcome::Halted { cycles } = runner.run(cycle_limit)?;

    let cpu = runner.cpu();
    println!("halted after {cycles} cycles at PC ${:04X}", cpu.pc());
    println!(
        "A=${:02X} X=${:02X} Y=${:02X} SP=${:02X} status={:08b}",
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.status()
    );
    println!(
        "result byte at ${RESULT_ADDRESS:04X}: ${:02X} [{}]",
        runner.result(),
        runner.result()
    );

    if let Some(expected) = expected {
        if runner.result() != expected {
            bail!(
                "result mismatch: expected ${expected:02X}, got ${:02X}",
                runner.result()
            );
        }
        println!("expected ${expected:02X}: OK");
    }
    Ok(())
}
