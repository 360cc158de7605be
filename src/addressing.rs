//! # Addressing Modes
//!
//! Every instruction that reads or writes an operand carries a one-byte mode
//! selector. The low nibble picks one of four mode families; the high nibble
//! must be 0-3 and is otherwise ignored, except by `cmp`, which decodes it as a
//! second, independent mode for its second operand.
//!
//! | Mode bytes                | Family             |
//! |---------------------------|--------------------|
//! | 0x00, 0x10, 0x20, 0x30    | Immediate          |
//! | 0x01, 0x11, 0x21, 0x31    | Register           |
//! | 0x02, 0x12, 0x22, 0x32    | Memory             |
//! | 0x03, 0x13, 0x23, 0x33    | Register-indirect  |
//!
//! Operand reads and writes share this single decoder, so an instruction's
//! source and destination always agree on the family.

use crate::ExecutionError;

/// Operand addressing mode family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// The operand byte is the value. Writes are discarded.
    Immediate,

    /// The operand byte is a register id.
    Register,

    /// The operand byte is a memory address.
    Memory,

    /// The operand byte is a register id; the register holds a memory address.
    RegisterIndirect,
}

impl AddressingMode {
    /// Decodes a mode byte.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::InvalidAddressingMode`] for any byte whose
    /// high or low nibble is above 3.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8vm::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::decode(0x21).unwrap(), AddressingMode::Register);
    /// assert!(AddressingMode::decode(0x04).is_err());
    /// assert!(AddressingMode::decode(0x40).is_err());
    /// ```
    pub fn decode(mode: u8) -> Result<Self, ExecutionError> {
        if mode >> 4 > 0x3 {
            return Err(ExecutionError::InvalidAddressingMode(mode));
        }

        match mode & 0x0F {
            0x0 => Ok(AddressingMode::Immediate),
            0x1 => Ok(AddressingMode::Register),
            0x2 => Ok(AddressingMode::Memory),
            0x3 => Ok(AddressingMode::RegisterIndirect),
            _ => Err(ExecutionError::InvalidAddressingMode(mode)),
        }
    }

    /// Assembly-style prefix used by the disassembler.
    pub fn prefix(self) -> &'static str {
        match self {
            AddressingMode::Immediate => "#",
            AddressingMode::Register => "r",
            AddressingMode::Memory => "$",
            AddressingMode::RegisterIndirect => "@r",
        }
    }
}
