//! # Flat Memory
//!
//! One 256-byte array holding code, data and the stack. There is no
//! protection between regions: a program can overwrite its own code, and the
//! stack grows down from the top of the same array.
//!
//! Addresses are `u8`, so every address is in range and no access can fail.

use crate::ExecutionError;

/// Size of the address space in bytes.
pub const MEMORY_SIZE: usize = 256;

/// Flat 256-byte memory.
///
/// # Examples
///
/// ```
/// use lib8vm::Memory;
///
/// let mut mem = Memory::new();
/// mem.write(0x42, 0xAB);
/// assert_eq!(mem.read(0x42), 0xAB);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates zero-filled memory.
    pub fn new() -> Self {
        Self {
            bytes: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    pub fn read(&self, addr: u8) -> u8 {
        self.bytes[addr as usize]
    }

    /// Writes `value` at `addr`.
    pub fn write(&mut self, addr: u8, value: u8) {
        self.bytes[addr as usize] = value;
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// Bytes past the end of the image are left as they were. An image longer
    /// than [`MEMORY_SIZE`] is rejected before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::ProgramTooLarge`] if `program` has more than
    /// 256 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8vm::{ExecutionError, Memory};
    ///
    /// let mut mem = Memory::new();
    /// mem.load(&[0x00, 0xFF]).unwrap();
    /// assert_eq!(mem.read(1), 0xFF);
    ///
    /// let too_big = vec![0u8; 257];
    /// assert!(matches!(
    ///     mem.load(&too_big),
    ///     Err(ExecutionError::ProgramTooLarge { len: 257, .. })
    /// ));
    /// ```
    pub fn load(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        if program.len() > MEMORY_SIZE {
            return Err(ExecutionError::ProgramTooLarge {
                len: program.len(),
                capacity: MEMORY_SIZE,
            });
        }

        self.bytes[..program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the size of the address space (always [`MEMORY_SIZE`]).
    pub fn len(&self) -> usize {
        MEMORY_SIZE
    }

    /// Memory is never empty; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
