//! Text console device.
//!
//! Characters are written to the output and flushed immediately. Input skips
//! ASCII whitespace, so typing `7<enter>` delivers a single `b'7'`. Draw
//! commands have no text rendering and are only logged.

use super::Device;
use std::io::{self, BufRead, Write};

/// Console device over any reader/writer pair.
///
/// # Examples
///
/// ```
/// use lib8vm::{Console, Device};
///
/// let mut console = Console::new(&b"  z"[..], Vec::new());
/// console.emit_char(b'h');
/// assert_eq!(console.read_byte(), b'z');
/// assert_eq!(console.into_writer(), b"h");
/// ```
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Device for Console<R, W> {
    fn emit_char(&mut self, byte: u8) {
        let result = self
            .writer
            .write_all(&[byte])
            .and_then(|()| self.writer.flush());
        if let Err(err) = result {
            log::warn!("console write failed: {}", err);
        }
    }

    fn draw_rect(&mut self, size: u8) {
        log::debug!("console: draw_rect({}) ignored", size);
    }

    fn draw_circle(&mut self, size: u8) {
        log::debug!("console: draw_circle({}) ignored", size);
    }

    fn draw_line(&mut self, size: u8) {
        log::debug!("console: draw_line({}) ignored", size);
    }

    fn read_byte(&mut self) -> u8 {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    log::warn!("console input closed, reading 0");
                    return 0;
                }
                Ok(_) if byte[0].is_ascii_whitespace() => continue,
                Ok(_) => return byte[0],
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    log::warn!("console read failed: {}, reading 0", err);
                    return 0;
                }
            }
        }
    }
}
