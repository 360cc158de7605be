//! Bitwise instructions: AND, OR, XOR, NOR, NAND (binary) and NOT (unary).

use super::{binary_op, Effect};
use crate::addressing::AddressingMode;
use crate::cpu::MachineState;
use crate::opcodes::{AND, NAND, NOR, OR, XOR};
use crate::ExecutionError;

/// Executes AND, OR, XOR, NOR or NAND. Encoding: `opcode mode dest src`.
pub(crate) fn execute_bitwise(
    state: &mut MachineState,
    opcode: u8,
) -> Result<Effect, ExecutionError> {
    binary_op(state, |lhs, rhs| match opcode {
        AND => lhs & rhs,
        OR => lhs | rhs,
        XOR => lhs ^ rhs,
        NOR => !(lhs | rhs),
        NAND => !(lhs & rhs),
        _ => unreachable!("not a bitwise opcode: 0x{:02X}", opcode),
    })
}

/// Executes NOT. Encoding: `0x23 mode dest` (3 bytes).
pub(crate) fn execute_not(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    let mode = state.next_byte();
    let dest = state.next_byte();

    let mode = AddressingMode::decode(mode)?;
    let value = state.fetch_as(mode, dest);
    state.store_as(mode, dest, !value);

    Ok(Effect::None)
}
