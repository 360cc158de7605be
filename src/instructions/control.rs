//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: absolute jump to the byte stored at the operand slot
//! - CAL: push the return address, jump to a literal target
//! - RET: pop the return address
//!
//! The stack shares memory with code and data. SP starts at 0xFF and points
//! at the most recently pushed byte, so the first push writes `memory[0xFE]`.

use super::Effect;
use crate::cpu::MachineState;
use crate::ExecutionError;

/// Executes JMP. Encoding: `0x07 target`.
///
/// PC is loaded from the operand slot itself; the operand is not stepped over
/// first.
pub(crate) fn execute_jmp(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    state.pc = state.memory.read(state.pc);
    Ok(Effect::None)
}

/// Executes CAL. Encoding: `0x06 target`.
///
/// Pushes the address of the byte after the operand, then jumps to `target`.
/// Faults with `StackOverflow` when SP is already 0.
pub(crate) fn execute_cal(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    let target = state.next_byte();
    let return_address = state.pc;

    state.push(return_address)?;
    state.pc = target;
    Ok(Effect::None)
}

/// Executes RET. Encoding: `0x05`.
///
/// Faults with `StackUnderflow` when nothing has been pushed.
pub(crate) fn execute_ret(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    state.pc = state.pop()?;
    Ok(Effect::None)
}
