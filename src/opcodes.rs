//! # Opcode Metadata Table
//!
//! A 256-entry table indexed by opcode byte, and the single source of truth
//! for mnemonics and operand widths. The executor and the disassembler both
//! read from it.
//!
//! Opcode map:
//!
//! | Range       | Instructions                                        |
//! |-------------|-----------------------------------------------------|
//! | 0x00-0x07   | nop, out, in, lea, mov, ret, cal, jmp               |
//! | 0x08-0x0D   | jl, jnl, jnm, jm, jne, je                           |
//! | 0x0E-0x0F   | cmp, int (reserved)                                 |
//! | 0x10-0x13   | add, sub, mul, div                                  |
//! | 0x20-0x27   | and, or, xor, not, nor, nand, push, pop             |
//! | 0x30-0x31   | reserved                                            |
//! | 0xFF        | hlt                                                 |
//!
//! Any other byte is undefined and faults with `UnknownOpcode`.

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use lib8vm::OPCODE_TABLE;
///
/// let add = &OPCODE_TABLE[0x10];
/// assert_eq!(add.mnemonic, "add");
/// assert_eq!(add.operands, 3);
/// assert!(add.defined);
///
/// assert!(!OPCODE_TABLE[0x99].defined);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic ("???" for undefined opcodes).
    pub mnemonic: &'static str,

    /// Number of operand bytes following the opcode.
    ///
    /// Jumps list their single target byte here, although a taken jump loads
    /// the PC from that byte instead of stepping past it.
    pub operands: u8,

    /// Whether the opcode is part of the instruction set.
    pub defined: bool,
}

impl OpcodeMetadata {
    const fn new(mnemonic: &'static str, operands: u8) -> Self {
        Self {
            mnemonic,
            operands,
            defined: true,
        }
    }

    /// Total encoded size in bytes, opcode included.
    pub fn size_bytes(&self) -> u8 {
        1 + self.operands
    }
}

const UNDEFINED: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    operands: 0,
    defined: false,
};

pub const NOP: u8 = 0x00;
pub const OUT: u8 = 0x01;
pub const IN: u8 = 0x02;
pub const LEA: u8 = 0x03;
pub const MOV: u8 = 0x04;
pub const RET: u8 = 0x05;
pub const CAL: u8 = 0x06;
pub const JMP: u8 = 0x07;
pub const JL: u8 = 0x08;
pub const JNL: u8 = 0x09;
pub const JNM: u8 = 0x0A;
pub const JM: u8 = 0x0B;
pub const JNE: u8 = 0x0C;
pub const JE: u8 = 0x0D;
pub const CMP: u8 = 0x0E;
pub const INT: u8 = 0x0F;
pub const ADD: u8 = 0x10;
pub const SUB: u8 = 0x11;
pub const MUL: u8 = 0x12;
pub const DIV: u8 = 0x13;
pub const AND: u8 = 0x20;
pub const OR: u8 = 0x21;
pub const XOR: u8 = 0x22;
pub const NOT: u8 = 0x23;
pub const NOR: u8 = 0x24;
pub const NAND: u8 = 0x25;
pub const PUSH: u8 = 0x26;
pub const POP: u8 = 0x27;
pub const RESERVED_30: u8 = 0x30;
pub const RESERVED_31: u8 = 0x31;
pub const HLT: u8 = 0xFF;

/// Complete 256-entry opcode table indexed by opcode byte.
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();

const fn build_table() -> [OpcodeMetadata; 256] {
    let mut table = [UNDEFINED; 256];

    table[NOP as usize] = OpcodeMetadata::new("nop", 0);
    table[OUT as usize] = OpcodeMetadata::new("out", 3);
    table[IN as usize] = OpcodeMetadata::new("in", 3);
    table[LEA as usize] = OpcodeMetadata::new("lea", 3);
    table[MOV as usize] = OpcodeMetadata::new("mov", 3);
    table[RET as usize] = OpcodeMetadata::new("ret", 0);
    table[CAL as usize] = OpcodeMetadata::new("cal", 1);
    table[JMP as usize] = OpcodeMetadata::new("jmp", 1);
    table[JL as usize] = OpcodeMetadata::new("jl", 1);
    table[JNL as usize] = OpcodeMetadata::new("jnl", 1);
    table[JNM as usize] = OpcodeMetadata::new("jnm", 1);
    table[JM as usize] = OpcodeMetadata::new("jm", 1);
    table[JNE as usize] = OpcodeMetadata::new("jne", 1);
    table[JE as usize] = OpcodeMetadata::new("je", 1);
    table[CMP as usize] = OpcodeMetadata::new("cmp", 3);
    table[INT as usize] = OpcodeMetadata::new("int", 0);

    table[ADD as usize] = OpcodeMetadata::new("add", 3);
    table[SUB as usize] = OpcodeMetadata::new("sub", 3);
    table[MUL as usize] = OpcodeMetadata::new("mul", 3);
    table[DIV as usize] = OpcodeMetadata::new("div", 3);

    table[AND as usize] = OpcodeMetadata::new("and", 3);
    table[OR as usize] = OpcodeMetadata::new("or", 3);
    table[XOR as usize] = OpcodeMetadata::new("xor", 3);
    table[NOT as usize] = OpcodeMetadata::new("not", 2);
    table[NOR as usize] = OpcodeMetadata::new("nor", 3);
    table[NAND as usize] = OpcodeMetadata::new("nand", 3);
    table[PUSH as usize] = OpcodeMetadata::new("push", 2);
    table[POP as usize] = OpcodeMetadata::new("pop", 2);

    table[RESERVED_30 as usize] = OpcodeMetadata::new("rsv", 0);
    table[RESERVED_31 as usize] = OpcodeMetadata::new("rsv", 0);

    table[HLT as usize] = OpcodeMetadata::new("hlt", 0);

    table
}
