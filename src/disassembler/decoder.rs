//! Instruction decoder for the disassembler

use crate::disassembler::Instruction;
use crate::opcodes::OPCODE_TABLE;

/// Decode a single instruction from the start of `bytes`.
///
/// Returns `None` for undefined opcodes or when the slice is too short to
/// hold the instruction's operands.
pub fn decode_instruction(bytes: &[u8], address: u8) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = &OPCODE_TABLE[opcode as usize];

    if !metadata.defined {
        return None;
    }

    let operands = metadata.operands as usize;
    if rest.len() < operands {
        return None;
    }

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        operand_bytes: rest[..operands].to_vec(),
        size_bytes: metadata.size_bytes(),
    })
}
