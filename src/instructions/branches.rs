//! # Conditional Jumps
//!
//! JL, JNL, JNM, JM, JNE and JE test one comparison flag. When the condition
//! holds, PC is loaded from the operand slot (like JMP); otherwise the operand
//! is skipped and execution falls through.

use super::Effect;
use crate::cpu::MachineState;
use crate::opcodes::{JE, JL, JM, JNE, JNL, JNM};
use crate::ExecutionError;

pub(crate) fn execute_branch(
    state: &mut MachineState,
    opcode: u8,
) -> Result<Effect, ExecutionError> {
    let taken = match opcode {
        JL => state.flag_less,
        JNL => !state.flag_less,
        JNM => !state.flag_more,
        JM => state.flag_more,
        JNE => !state.flag_equal,
        JE => state.flag_equal,
        _ => unreachable!("not a branch opcode: 0x{:02X}", opcode),
    };

    if taken {
        state.pc = state.memory.read(state.pc);
    } else {
        state.pc = state.pc.wrapping_add(1);
    }

    Ok(Effect::None)
}
