//! Processor configuration.

use crate::clock::{Clock, DEFAULT_CLOCK_HZ};

/// Run-loop settings for a [`Processor`](crate::Processor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Clock frequency in cycles per second. `None` runs unpaced.
    pub clock_hz: Option<u32>,

    /// Stop `run()` after this many cycles. `None` runs until halt or fault.
    pub max_cycles: Option<u64>,
}

impl ProcessorConfig {
    pub fn clock(&self) -> Clock {
        match self.clock_hz {
            Some(hz) => Clock::from_hz(hz),
            None => Clock::unpaced(),
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            clock_hz: Some(DEFAULT_CLOCK_HZ),
            max_cycles: None,
        }
    }
}
