//! # I/O Instructions
//!
//! OUT and IN never touch a device directly. They return an [`Effect`] that
//! the processor hands to its device.

use super::{Effect, OutputCommand};
use crate::addressing::AddressingMode;
use crate::cpu::MachineState;
use crate::ExecutionError;

/// Executes OUT. Encoding: `0x01 mode data port`.
///
/// The operand is resolved through `mode` (so an undefined mode still
/// faults), but the command payload is the literal `data` byte, not the
/// resolved value. Ports above 3 do nothing.
pub(crate) fn execute_out(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    let mode = state.next_byte();
    let data = state.next_byte();
    let port = state.next_byte();

    let _resolved = state.fetch_as(AddressingMode::decode(mode)?, data);

    let command = match port {
        0 => OutputCommand::Char(data),
        1 => OutputCommand::Rect(data),
        2 => OutputCommand::Circle(data),
        3 => OutputCommand::Line(data),
        _ => return Ok(Effect::None),
    };
    Ok(Effect::Output(command))
}

/// Executes IN. Encoding: `0x02 mode dest port`.
///
/// The port byte is consumed but does not select an input channel.
pub(crate) fn execute_in(state: &mut MachineState) -> Result<Effect, ExecutionError> {
    let mode = state.next_byte();
    let dest = state.next_byte();
    let _port = state.next_byte();

    Ok(Effect::Input {
        mode: AddressingMode::decode(mode)?,
        dest,
    })
}
