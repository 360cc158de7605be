//! # Processor State and Execution
//!
//! This module contains the machine state and the [`Processor`] that drives
//! the fetch-decode-execute loop.
//!
//! ## Machine State
//!
//! [`MachineState`] holds everything an instruction can touch:
//! - **Memory**: flat 256 bytes shared by code, data and stack
//! - **Registers**: 256 byte slots addressed by id
//! - **Program counter** (PC): 8-bit address of the next byte to fetch, wraps
//! - **Stack pointer** (SP): starts at 0xFF; push pre-decrements, pop
//!   post-increments
//! - **Comparison flags**: equal, less, more, set together by `cmp`
//! - **Halted** flag
//!
//! ## Execution Model
//!
//! - `step()`: one unpaced cycle
//! - `run()`: cycles paced by the clock until halt, fault, or cycle limit
//!
//! The executor works on `MachineState` alone and hands I/O back as an
//! [`Effect`]; the processor applies effects to its [`Device`].

use crate::addressing::AddressingMode;
use crate::clock::Clock;
use crate::config::ProcessorConfig;
use crate::instructions::{self, Effect, OutputCommand};
use crate::io::Device;
use crate::memory::Memory;
use crate::registers::RegisterFile;
use crate::{ExecutionError, OPCODE_TABLE};

/// Initial stack pointer; also the boundary a pop may not cross.
pub const STACK_TOP: u8 = 0xFF;

/// Everything the instruction set can read or write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineState {
    pub(crate) memory: Memory,
    pub(crate) registers: RegisterFile,

    /// Address of the next byte to fetch
    pub(crate) pc: u8,

    /// Address of the opcode currently executing, for fault reports
    pub(crate) instruction_pc: u8,

    /// Stack pointer (last pushed byte is at `memory[sp]`)
    pub(crate) sp: u8,

    pub(crate) flag_equal: bool,
    pub(crate) flag_less: bool,
    pub(crate) flag_more: bool,

    pub(crate) halted: bool,
}

impl MachineState {
    /// Power-on state: zeroed memory and registers, PC 0, SP 0xFF, flags clear.
    pub fn new() -> Self {
        Self {
            memory: Memory::new(),
            registers: RegisterFile::new(),
            pc: 0x00,
            instruction_pc: 0x00,
            sp: STACK_TOP,
            flag_equal: false,
            flag_less: false,
            flag_more: false,
            halted: false,
        }
    }

    /// Reads the byte at PC and advances PC by one.
    pub(crate) fn next_byte(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Resolves an operand through a mode byte.
    pub fn fetch(&self, mode: u8, operand: u8) -> Result<u8, ExecutionError> {
        Ok(self.fetch_as(AddressingMode::decode(mode)?, operand))
    }

    /// Writes a value through a mode byte. Immediate-mode writes are discarded.
    pub fn store(&mut self, mode: u8, dest: u8, value: u8) -> Result<(), ExecutionError> {
        self.store_as(AddressingMode::decode(mode)?, dest, value);
        Ok(())
    }

    pub(crate) fn fetch_as(&self, mode: AddressingMode, operand: u8) -> u8 {
        match mode {
            AddressingMode::Immediate => operand,
            AddressingMode::Register => self.registers.get(operand),
            AddressingMode::Memory => self.memory.read(operand),
            AddressingMode::RegisterIndirect => self.memory.read(self.registers.get(operand)),
        }
    }

    pub(crate) fn store_as(&mut self, mode: AddressingMode, dest: u8, value: u8) {
        match mode {
            AddressingMode::Immediate => {}
            AddressingMode::Register => self.registers.set(dest, value),
            AddressingMode::Memory => self.memory.write(dest, value),
            AddressingMode::RegisterIndirect => {
                let addr = self.registers.get(dest);
                self.memory.write(addr, value);
            }
        }
    }

    /// Pushes one byte. Faults instead of wrapping when SP is already 0.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), ExecutionError> {
        let Some(sp) = self.sp.checked_sub(1) else {
            return Err(ExecutionError::StackOverflow {
                pc: self.instruction_pc,
            });
        };
        self.sp = sp;
        self.memory.write(self.sp, value);
        Ok(())
    }

    /// Pops one byte. Faults when nothing has been pushed (SP at 0xFF).
    pub(crate) fn pop(&mut self) -> Result<u8, ExecutionError> {
        if self.sp >= STACK_TOP {
            return Err(ExecutionError::StackUnderflow {
                pc: self.instruction_pc,
            });
        }
        self.sp += 1;
        Ok(self.memory.read(self.sp))
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn pc(&self) -> u8 {
        self.pc
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn flag_equal(&self) -> bool {
        self.flag_equal
    }

    pub fn flag_less(&self) -> bool {
        self.flag_less
    }

    pub fn flag_more(&self) -> bool {
        self.flag_more
    }

    pub fn halted(&self) -> bool {
        self.halted
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a single `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction completed and the processor can continue.
    Running,

    /// The processor is halted (by `hlt`, or it already was).
    Halted,
}

/// Why `run()` returned normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A `hlt` instruction stopped the processor.
    Halted,

    /// The configured `max_cycles` budget was used up.
    CycleLimit,
}

/// Summary of a completed `run()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles executed during this run.
    pub cycles: u64,
    pub outcome: RunOutcome,
}

/// The processor: machine state, clock, and an I/O device.
///
/// # Type Parameters
///
/// * `D` - I/O device reached by the `out` and `in` instructions
///
/// # Examples
///
/// ```
/// use lib8vm::{BufferedDevice, Processor, StepOutcome};
///
/// let mut cpu = Processor::new(BufferedDevice::new());
/// cpu.load(&[0x07, 0x05]).unwrap(); // jmp $05
///
/// assert_eq!(cpu.step().unwrap(), StepOutcome::Running);
/// assert_eq!(cpu.pc(), 0x05);
/// ```
pub struct Processor<D: Device> {
    state: MachineState,
    device: D,
    clock: Clock,
    max_cycles: Option<u64>,

    /// Total cycles executed since the last load
    cycles: u64,

    /// Fault that stopped the processor, if any, until the next load
    fault: Option<ExecutionError>,
}

impl<D: Device> Processor<D> {
    /// Creates a processor with the default configuration (16 Hz, unbounded).
    pub fn new(device: D) -> Self {
        Self::with_config(device, ProcessorConfig::default())
    }

    pub fn with_config(device: D, config: ProcessorConfig) -> Self {
        Self {
            state: MachineState::new(),
            device,
            clock: config.clock(),
            max_cycles: config.max_cycles,
            cycles: 0,
            fault: None,
        }
    }

    /// Resets the machine and loads a program image at address 0.
    ///
    /// On failure the previous state is kept unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::ProgramTooLarge`] for images over 256 bytes.
    pub fn load(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        let mut state = MachineState::new();
        state.memory.load(program)?;

        log::debug!("loaded {} byte program", program.len());
        self.state = state;
        self.cycles = 0;
        self.fault = None;
        Ok(())
    }

    /// Executes one instruction without clock pacing.
    ///
    /// A fault halts the processor and is returned. Later calls return the
    /// same fault without touching any state, until the next `load()`.
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        if self.state.halted {
            return Ok(StepOutcome::Halted);
        }

        if log::log_enabled!(log::Level::Trace) {
            let opcode = self.state.memory.read(self.state.pc);
            log::trace!(
                "{:02X}: {} (sp={:02X})",
                self.state.pc,
                OPCODE_TABLE[opcode as usize].mnemonic,
                self.state.sp
            );
        }

        let result = instructions::execute(&mut self.state).map(|effect| self.apply(effect));
        self.cycles += 1;

        match result {
            Ok(()) if self.state.halted => Ok(StepOutcome::Halted),
            Ok(()) => Ok(StepOutcome::Running),
            Err(err) => {
                self.state.halted = true;
                self.fault = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Runs paced cycles until `hlt`, a fault, or the cycle limit.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised; the processor is halted afterwards
    /// and later runs return the same fault.
    pub fn run(&mut self) -> Result<RunSummary, ExecutionError> {
        let clock = self.clock;
        let mut executed = 0u64;

        loop {
            if let Some(fault) = &self.fault {
                return Err(fault.clone());
            }
            if self.state.halted {
                return Ok(RunSummary {
                    cycles: executed,
                    outcome: RunOutcome::Halted,
                });
            }
            if self.max_cycles.is_some_and(|max| executed >= max) {
                log::info!("cycle limit reached after {} cycles", executed);
                return Ok(RunSummary {
                    cycles: executed,
                    outcome: RunOutcome::CycleLimit,
                });
            }

            clock.cycle(|| self.step())?;
            executed += 1;
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Output(command) => match command {
                OutputCommand::Char(byte) => self.device.emit_char(byte),
                OutputCommand::Rect(size) => self.device.draw_rect(size),
                OutputCommand::Circle(size) => self.device.draw_circle(size),
                OutputCommand::Line(size) => self.device.draw_line(size),
            },
            Effect::Input { mode, dest } => {
                let value = self.device.read_byte();
                self.state.store_as(mode, dest, value);
            }
            Effect::Halt => {
                log::info!("halted at pc 0x{:02X}", self.state.instruction_pc);
                self.state.halted = true;
            }
        }
    }

    // ========== State Accessors ==========

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn pc(&self) -> u8 {
        self.state.pc
    }

    pub fn set_pc(&mut self, pc: u8) {
        self.state.pc = pc;
    }

    pub fn sp(&self) -> u8 {
        self.state.sp
    }

    pub fn set_sp(&mut self, sp: u8) {
        self.state.sp = sp;
    }

    pub fn flag_equal(&self) -> bool {
        self.state.flag_equal
    }

    pub fn flag_less(&self) -> bool {
        self.state.flag_less
    }

    pub fn flag_more(&self) -> bool {
        self.state.flag_more
    }

    /// Sets the three comparison flags directly (equal, less, more).
    pub fn set_flags(&mut self, equal: bool, less: bool, more: bool) {
        self.state.flag_equal = equal;
        self.state.flag_less = less;
        self.state.flag_more = more;
    }

    pub fn halted(&self) -> bool {
        self.state.halted
    }

    /// The fault that stopped the processor, or `None` after a clean halt.
    pub fn fault(&self) -> Option<&ExecutionError> {
        self.fault.as_ref()
    }

    /// Cycles executed since the last load, including a faulting one.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.state.memory
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.state.registers
    }

    pub fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.state.registers
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }
}
