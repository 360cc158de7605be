//! # Instruction Implementations
//!
//! One function per instruction, grouped by category. Every function works on
//! [`MachineState`] alone: it consumes exactly its own operand bytes from the
//! PC, updates state, and returns an [`Effect`] for anything that must reach
//! the I/O device.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and compare (ADD, SUB, MUL, DIV, CMP)
//! - **logic**: Bitwise operations (AND, OR, XOR, NOT, NOR, NAND)
//! - **transfer**: Data movement (LEA, MOV)
//! - **control**: Control flow (JMP, CAL, RET, NOP, INT, HLT, reserved)
//! - **branches**: Conditional jumps (JL, JNL, JNM, JM, JNE, JE)
//! - **stack**: Stack operations (PUSH, POP)
//! - **io**: Device I/O (OUT, IN)

pub mod alu;
pub mod branches;
pub mod control;
pub mod io;
pub mod logic;
pub mod stack;
pub mod transfer;

use crate::addressing::AddressingMode;
use crate::cpu::MachineState;
use crate::opcodes::*;
use crate::ExecutionError;

/// Side effect requested by an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing outside the machine state changes.
    None,

    /// Send a command to the output surface.
    Output(OutputCommand),

    /// Read one byte from the input surface (blocking) and store it.
    Input { mode: AddressingMode, dest: u8 },

    /// Stop the run loop.
    Halt,
}

/// Output surface command produced by `out`, keyed by port number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCommand {
    /// Port 0: print one character.
    Char(u8),

    /// Port 1: filled rectangle of the given size.
    Rect(u8),

    /// Port 2: filled circle of the given size.
    Circle(u8),

    /// Port 3: line of the given extent.
    Line(u8),
}

/// Fetches, decodes and executes one instruction.
pub(crate) fn execute(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    state.instruction_pc = state.pc;
    let opcode = state.next_byte();

    match opcode {
        NOP | INT | RESERVED_30 | RESERVED_31 => Ok(Effect::None),
        OUT => io::execute_out(state),
        IN => io::execute_in(state),
        LEA => transfer::execute_lea(state),
        MOV => transfer::execute_mov(state),
        RET => control::execute_ret(state),
        CAL => control::execute_cal(state),
        JMP => control::execute_jmp(state),
        JL | JNL | JNM | JM | JNE | JE => branches::execute_branch(state, opcode),
        CMP => alu::execute_cmp(state),
        ADD | SUB | MUL | DIV => alu::execute_arithmetic(state, opcode),
        AND | OR | XOR | NOR | NAND => logic::execute_bitwise(state, opcode),
        NOT => logic::execute_not(state),
        PUSH => stack::execute_push(state),
        POP => stack::execute_pop(state),
        HLT => Ok(Effect::Halt),
        _ => Err(ExecutionError::UnknownOpcode {
            opcode,
            pc: state.instruction_pc,
        }),
    }
}

/// Shared shape of the binary ALU and logic instructions:
/// `mode, dest, src`, both operands resolved with the same mode, result
/// written back to `dest`.
pub(crate) fn binary_op(
    state: &mut MachineState,
    op: impl FnOnce(u8, u8) -> u8,
) -> Result<Effect, ExecutionError> {
    let mode = state.next_byte();
    let dest = state.next_byte();
    let src = state.next_byte();

    let mode = AddressingMode::decode(mode)?;
    let lhs = state.fetch_as(mode, dest);
    let rhs = state.fetch_as(mode, src);
    state.store_as(mode, dest, op(lhs, rhs));

    Ok(Effect::None)
}
