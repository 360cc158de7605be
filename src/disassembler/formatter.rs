//! Formatting functions for disassembled instructions
//!
//! Operands are written with a prefix for their addressing mode:
//! `#` immediate, `r` register, `$` memory, `@r` register-indirect.

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;
use crate::opcodes::*;

/// Format a single instruction as assembly text
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format an instruction as a listing line: address, raw bytes, text.
///
/// ```
/// use lib8vm::disassembler::{disassemble, format_listing};
///
/// let listing = disassemble(&[0x06, 0x10], 0);
/// assert_eq!(format_listing(&listing[0]), "00: 06 10         cal $10");
/// ```
pub fn format_listing(instr: &Instruction) -> String {
    let raw: Vec<String> = std::iter::once(instr.opcode)
        .chain(instr.operand_bytes.iter().copied())
        .map(|b| format!("{:02X}", b))
        .collect();

    format!(
        "{:02X}: {:<12}  {}",
        instr.address,
        raw.join(" "),
        format_instruction(instr)
    )
}

fn format_operand(instr: &Instruction) -> String {
    if instr.mnemonic == ".byte" {
        return format!("${:02X}", instr.opcode);
    }

    let ops = &instr.operand_bytes;
    match instr.opcode {
        CAL | JMP | JL | JNL | JNM | JM | JNE | JE => format!("${:02X}", ops[0]),
        OUT | IN => format!("{}, {}", operand(ops[0], ops[1]), ops[2]),
        LEA => format!("{}, #{:02X}", operand(ops[0], ops[1]), ops[2]),
        MOV | ADD | SUB | MUL | DIV | AND | OR | XOR | NOR | NAND => {
            format!("{}, {}", operand(ops[0], ops[1]), operand(ops[0], ops[2]))
        }
        CMP => format!(
            "{}, {}",
            operand(ops[0] & 0x0F, ops[1]),
            operand(ops[0] >> 4, ops[2])
        ),
        NOT | PUSH | POP => operand(ops[0], ops[1]),
        _ => String::new(),
    }
}

fn operand(mode: u8, value: u8) -> String {
    match AddressingMode::decode(mode) {
        Ok(mode) => format!("{}{:02X}", mode.prefix(), value),
        Err(_) => format!("?{:02X}:{:02X}", mode, value),
    }
}
