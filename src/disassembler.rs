//! Disassembler Module
//!
//! Converts a program image into readable instruction listings using the
//! opcode table.

pub mod decoder;
pub mod formatter;

pub use formatter::{format_instruction, format_listing};

/// A single disassembled instruction
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Address where this instruction starts
    pub address: u8,

    /// The opcode byte value
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "mov", "jmp"), or ".byte" for data
    pub mnemonic: &'static str,

    /// Operand bytes (0-3 depending on the opcode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (opcode + operands)
    pub size_bytes: u8,
}

/// Disassemble a byte slice starting at `start_address`.
///
/// Undefined opcodes, and instructions cut short by the end of the slice,
/// become single-byte `.byte` entries. At most 256 bytes are decoded.
///
/// # Examples
///
/// ```
/// use lib8vm::disassembler::{disassemble, format_instruction};
///
/// let listing = disassemble(&[0x10, 0x01, 0x01, 0x02, 0xFF], 0x00);
/// assert_eq!(listing.len(), 2);
/// assert_eq!(format_instruction(&listing[0]), "add r01, r02");
/// assert_eq!(format_instruction(&listing[1]), "hlt");
/// ```
pub fn disassemble(bytes: &[u8], start_address: u8) -> Vec<Instruction> {
    let bytes = &bytes[..bytes.len().min(crate::MEMORY_SIZE)];
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start_address;

    while offset < bytes.len() {
        match decoder::decode_instruction(&bytes[offset..], address) {
            Some(instr) => {
                offset += instr.size_bytes as usize;
                address = address.wrapping_add(instr.size_bytes);
                instructions.push(instr);
            }
            None => {
                instructions.push(Instruction {
                    address,
                    opcode: bytes[offset],
                    mnemonic: ".byte",
                    operand_bytes: Vec::new(),
                    size_bytes: 1,
                });
                offset += 1;
                address = address.wrapping_add(1);
            }
        }
    }

    instructions
}
