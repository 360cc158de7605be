//! # Transfer Instructions
//!
//! - LEA: store a literal address byte into the destination
//! - MOV: copy a resolved source operand into the destination
//!
//! Both use one mode byte for source and destination.

use super::Effect;
use crate::addressing::AddressingMode;
use crate::cpu::MachineState;
use crate::ExecutionError;

/// Executes LEA. Encoding: `0x03 mode dest addr`.
///
/// `addr` is stored as-is; memory at `addr` is never read.
pub(crate) fn execute_lea(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    let mode = state.next_byte();
    let dest = state.next_byte();
    let addr = state.next_byte();

    state.store_as(AddressingMode::decode(mode)?, dest, addr);
    Ok(Effect::None)
}

/// Executes MOV. Encoding: `0x04 mode dest src`.
pub(crate) fn execute_mov(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    let mode = state.next_byte();
    let dest = state.next_byte();
    let src = state.next_byte();

    let mode = AddressingMode::decode(mode)?;
    let value = state.fetch_as(mode, src);
    state.store_as(mode, dest, value);
    Ok(Effect::None)
}
