//! # ALU Instructions
//!
//! This module implements arithmetic and compare operations:
//! - ADD, SUB, MUL, DIV: byte-wrapping arithmetic, result written to dest
//! - CMP: sets the equal/less/more flags
//!
//! Division by zero is not a fault; it yields 0.

use super::{binary_op, Effect};
use crate::addressing::AddressingMode;
use crate::cpu::MachineState;
use crate::opcodes::{ADD, DIV, MUL, SUB};
use crate::ExecutionError;

/// Executes ADD, SUB, MUL or DIV.
///
/// Encoding: `opcode mode dest src` (4 bytes). Both operands are resolved
/// with the same mode.
pub(crate) fn execute_arithmetic(
    state: &mut MachineState,
    opcode: u8,
) -> Result<Effect, ExecutionError> {
    binary_op(state, |lhs, rhs| match opcode {
        ADD => lhs.wrapping_add(rhs),
        SUB => lhs.wrapping_sub(rhs),
        MUL => lhs.wrapping_mul(rhs),
        DIV => lhs.checked_div(rhs).unwrap_or(0),
        _ => unreachable!("not an arithmetic opcode: 0x{:02X}", opcode),
    })
}

/// Executes the CMP instruction.
///
/// Encoding: `0x0E mode op1 op2`. The low nibble of `mode` selects how `op1`
/// is resolved, the high nibble how `op2` is resolved. Exactly one of the
/// three flags is set afterwards, from an unsigned comparison.
pub(crate) fn execute_cmp(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    let mode = state.next_byte();
    let op1 = state.next_byte();
    let op2 = state.next_byte();

    let lhs = state.fetch_as(AddressingMode::decode(mode & 0x0F)?, op1);
    let rhs = state.fetch_as(AddressingMode::decode(mode >> 4)?, op2);

    state.flag_equal = lhs == rhs;
    state.flag_less = lhs < rhs;
    state.flag_more = lhs > rhs;

    Ok(Effect::None)
}
