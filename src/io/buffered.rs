//! In-memory device: queued input bytes and a log of output commands.

use super::Device;
use crate::instructions::OutputCommand;
use std::collections::VecDeque;

/// Device that records output and serves input from a FIFO.
///
/// Reading from an empty queue returns 0 instead of blocking.
#[derive(Debug, Clone, Default)]
pub struct BufferedDevice {
    input: VecDeque<u8>,
    events: Vec<OutputCommand>,
}

impl BufferedDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a device with `bytes` queued as input.
    pub fn with_input(bytes: &[u8]) -> Self {
        let mut device = Self::new();
        device.push_input(bytes);
        device
    }

    /// Appends bytes to the input queue.
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    /// Number of input bytes not yet read.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// All output commands, oldest first.
    pub fn events(&self) -> &[OutputCommand] {
        &self.events
    }

    /// Characters emitted on port 0, as text.
    pub fn output_text(&self) -> String {
        self.events
            .iter()
            .filter_map(|event| match event {
                OutputCommand::Char(byte) => Some(*byte as char),
                _ => None,
            })
            .collect()
    }
}

impl Device for BufferedDevice {
    fn emit_char(&mut self, byte: u8) {
        self.events.push(OutputCommand::Char(byte));
    }

    fn draw_rect(&mut self, size: u8) {
        self.events.push(OutputCommand::Rect(size));
    }

    fn draw_circle(&mut self, size: u8) {
        self.events.push(OutputCommand::Circle(size));
    }

    fn draw_line(&mut self, size: u8) {
        self.events.push(OutputCommand::Line(size));
    }

    fn read_byte(&mut self) -> u8 {
        self.input.pop_front().unwrap_or(0)
    }
}
