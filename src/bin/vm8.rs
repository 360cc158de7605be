//! Command-line runner: loads a raw program image and runs it on the console.
//!
//! Exit status is 0 when the program halts (or the cycle limit is reached)
//! and 1 on any load or execution fault.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use lib8vm::disassembler::{disassemble, format_listing};
use lib8vm::{Console, Processor, ProcessorConfig, RunOutcome, DEFAULT_CLOCK_HZ};

#[derive(Parser, Debug)]
#[command(version, about = "Run a program image on the 8-bit virtual processor")]
struct Args {
    /// Program image to load at address 0 (at most 256 bytes)
    #[arg(value_name = "PROGRAM")]
    program: PathBuf,

    /// Clock frequency in cycles per second
    #[arg(long, default_value_t = DEFAULT_CLOCK_HZ)]
    hz: u32,

    /// Run as fast as possible instead of pacing to the clock
    #[arg(long)]
    unpaced: bool,

    /// Stop after this many cycles
    #[arg(long, value_name = "N")]
    max_cycles: Option<u64>,

    /// Print a disassembly of the image and exit
    #[arg(short, long)]
    disassemble: bool,

    /// Print a hex dump of the image before running
    #[arg(long)]
    dump: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(row, chunk)| {
            let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
            format!("{:02x}: {}", row * 16, hex.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = SimpleLogger::new().with_level(log_level(args.verbose)).init() {
        eprintln!("Error: failed to initialise logging: {}", err);
        return ExitCode::FAILURE;
    }

    let image = match fs::read(&args.program) {
        Ok(image) => image,
        Err(err) => {
            eprintln!(
                "Error: failed to open file {}: {}",
                args.program.display(),
                err
            );
            return ExitCode::FAILURE;
        }
    };

    let config = ProcessorConfig {
        clock_hz: (!args.unpaced).then_some(args.hz),
        max_cycles: args.max_cycles,
    };
    let mut cpu = Processor::with_config(Console::stdio(), config);

    if let Err(err) = cpu.load(&image) {
        eprintln!("Error: {}", err);
        return ExitCode::FAILURE;
    }

    if args.disassemble {
        for instr in disassemble(&image, 0) {
            println!("{}", format_listing(&instr));
        }
        return ExitCode::SUCCESS;
    }

    if args.dump {
        println!("{}\n", hex_dump(&image));
    }

    match cpu.run() {
        Ok(summary) => {
            match summary.outcome {
                RunOutcome::Halted => log::info!("halted after {} cycles", summary.cycles),
                RunOutcome::CycleLimit => {
                    log::warn!("stopped at cycle limit ({} cycles)", summary.cycles)
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
