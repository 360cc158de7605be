//! # I/O Devices
//!
//! The processor reaches the outside world only through the `out` and `in`
//! instructions, and only through a [`Device`] it owns. Devices are passed in
//! at construction, so the same program runs against a terminal, a graphics
//! surface, or an in-memory test double.
//!
//! # Implementations
//!
//! - [`Console`]: text echo on a writer, bytes from a reader (stdio by default)
//! - [`BufferedDevice`]: queued input and captured output, for tests and
//!   embedders
//!
//! # Example
//!
//! ```rust
//! use lib8vm::{BufferedDevice, Device, OutputCommand};
//!
//! let mut device = BufferedDevice::with_input(b"A");
//! device.emit_char(b'x');
//! device.draw_circle(9);
//!
//! assert_eq!(device.read_byte(), b'A');
//! assert_eq!(
//!     device.events(),
//!     &[OutputCommand::Char(b'x'), OutputCommand::Circle(9)]
//! );
//! ```

pub mod buffered;
pub mod console;

pub use buffered::BufferedDevice;
pub use console::Console;

/// Output and input surface used by the `out` and `in` instructions.
///
/// Output calls are fire-and-forget. The draw calls default to doing nothing,
/// which is the behavior of a text-only surface; graphics surfaces override
/// them.
pub trait Device {
    /// Port 0: print one character.
    fn emit_char(&mut self, byte: u8);

    /// Port 1: draw a filled rectangle of the given size.
    fn draw_rect(&mut self, size: u8) {
        let _ = size;
    }

    /// Port 2: draw a filled circle of the given size.
    fn draw_circle(&mut self, size: u8) {
        let _ = size;
    }

    /// Port 3: draw a line of the given extent.
    fn draw_line(&mut self, size: u8) {
        let _ = size;
    }

    /// Reads one byte, blocking until one is available.
    fn read_byte(&mut self) -> u8;
}

/// Lets the output surface be chosen at runtime, as `Processor<Box<dyn Device>>`.
impl<D: Device + ?Sized> Device for Box<D> {
    fn emit_char(&mut self, byte: u8) {
        (**self).emit_char(byte)
    }

    fn draw_rect(&mut self, size: u8) {
        (**self).draw_rect(size)
    }

    fn draw_circle(&mut self, size: u8) {
        (**self).draw_circle(size)
    }

    fn draw_line(&mut self, size: u8) {
        (**self).draw_line(size)
    }

    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }
}
