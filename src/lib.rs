//! # 8-bit Virtual Processor
//!
//! A small emulated processor with one flat 256-byte address space shared by
//! code, data and stack, a 256-slot register file, four addressing modes and a
//! fetch-decode-execute loop paced to a fixed clock (16 Hz by default).
//!
//! ## Quick Start
//!
//! ```rust
//! use lib8vm::{BufferedDevice, Processor, ProcessorConfig};
//!
//! // out #'H', port 0 ; hlt
//! let program = [0x01, 0x00, b'H', 0x00, 0xFF];
//!
//! let config = ProcessorConfig { clock_hz: None, max_cycles: None };
//! let mut cpu = Processor::with_config(BufferedDevice::new(), config);
//! cpu.load(&program).unwrap();
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.device().output_text(), "H");
//! ```
//!
//! ## Architecture
//!
//! - The executor in `instructions` only touches [`MachineState`]. Instructions
//!   that talk to the outside world return an [`Effect`] instead.
//! - [`Processor`] owns the machine state, the clock and an I/O [`Device`], and
//!   is the only place where effects reach the device.
//! - All faults are values of [`ExecutionError`]; a fault halts the processor.
//!
//! ## Modules
//!
//! - `cpu` - Processor, machine state and the run loop
//! - `memory` - Flat 256-byte memory
//! - `registers` - Register file
//! - `addressing` - Addressing-mode decoding
//! - `opcodes` - Opcode metadata table
//! - `clock` - Cycle pacing
//! - `io` - I/O device trait and implementations
//! - `disassembler` - Listing generation from a program image

pub mod addressing;
pub mod clock;
pub mod config;
pub mod cpu;
pub mod disassembler;
pub mod io;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use clock::{Clock, DEFAULT_CLOCK_HZ};
pub use config::ProcessorConfig;
pub use cpu::{MachineState, Processor, RunOutcome, RunSummary, StepOutcome};
pub use instructions::{Effect, OutputCommand};
pub use io::{BufferedDevice, Console, Device};
pub use memory::{Memory, MEMORY_SIZE};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
pub use registers::{RegisterFile, REGISTER_COUNT};

use thiserror::Error;

/// Faults that stop the processor.
///
/// Every fault is unrecoverable within a run: the run loop stops at the first
/// one and the processor stays halted until a fresh image is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// Program image does not fit in memory.
    #[error("program too large for memory ({len} bytes, capacity {capacity})")]
    ProgramTooLarge { len: usize, capacity: usize },

    /// Mode byte is not one of the defined addressing modes.
    #[error("invalid addressing mode 0x{0:02X}")]
    InvalidAddressingMode(u8),

    /// `push` or `cal` with the stack pointer already at address 0.
    #[error("stack overflow at pc 0x{pc:02X}")]
    StackOverflow { pc: u8 },

    /// `pop` or `ret` with an empty stack.
    #[error("stack underflow at pc 0x{pc:02X}")]
    StackUnderflow { pc: u8 },

    /// Opcode byte is not part of the instruction set.
    #[error("unknown opcode 0x{opcode:02X} at pc 0x{pc:02X}")]
    UnknownOpcode { opcode: u8, pc: u8 },
}
