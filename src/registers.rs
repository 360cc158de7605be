//! Register file: 256 general-purpose byte slots addressed by an 8-bit id.
//!
//! Programs conventionally use ids 0x01-0x24, but every id is backed by a
//! slot. Registers never alias memory.

/// Number of register slots.
pub const REGISTER_COUNT: usize = 256;

/// 256 byte-wide registers, all zero at reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    slots: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            slots: [0; REGISTER_COUNT],
        }
    }

    /// Returns the value of register `id`.
    pub fn get(&self, id: u8) -> u8 {
        self.slots[id as usize]
    }

    /// Sets register `id` to `value`.
    pub fn set(&mut self, id: u8, value: u8) {
        self.slots[id as usize] = value;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.slots
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
