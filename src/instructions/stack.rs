//! # Stack Operations
//!
//! - PUSH: resolve a source operand and push it
//! - POP: pop one byte into a destination
//!
//! Bounds are checked before SP moves: PUSH at SP 0 faults with
//! `StackOverflow`, POP at SP 0xFF faults with `StackUnderflow`.

use super::Effect;
use crate::addressing::AddressingMode;
use crate::cpu::MachineState;
use crate::ExecutionError;

/// Executes PUSH. Encoding: `0x26 mode src`.
pub(crate) fn execute_push(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    let mode = state.next_byte();
    let src = state.next_byte();

    let value = state.fetch_as(AddressingMode::decode(mode)?, src);
    state.push(value)?;
    Ok(Effect::None)
}

/// Executes POP. Encoding: `0x27 mode dest`.
pub(crate) fn execute_pop(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    let mode = state.next_byte();
    let dest = state.next_byte();

    let mode = AddressingMode::decode(mode)?;
    let value = state.pop()?;
    state.store_as(mode, dest, value);
    Ok(Effect::None)
}
