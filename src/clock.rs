//! # Cycle Clock
//!
//! Paces the fetch-decode-execute loop to a fixed period. Each cycle is timed;
//! if it finished early the calling thread sleeps off the rest of the period.
//! An overrunning cycle is followed immediately by the next one, with no
//! catch-up, so drift accumulates.

use std::thread;
use std::time::{Duration, Instant};

/// Default clock frequency (16 cycles per second, 62.5 ms per cycle).
pub const DEFAULT_CLOCK_HZ: u32 = 16;

/// Fixed-period cycle clock.
///
/// # Examples
///
/// ```
/// use lib8vm::Clock;
/// use std::time::Duration;
///
/// assert_eq!(Clock::default().period(), Duration::from_micros(62_500));
/// assert_eq!(Clock::unpaced().period(), Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    period: Duration,
}

impl Clock {
    /// Creates a clock with the given cycle period.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Creates a clock running at `hz` cycles per second. A frequency of 0
    /// yields an unpaced clock.
    pub fn from_hz(hz: u32) -> Self {
        if hz == 0 {
            return Self::unpaced();
        }
        Self::new(Duration::from_secs(1) / hz)
    }

    /// A clock that never sleeps.
    pub fn unpaced() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Runs one cycle, then sleeps for whatever is left of the period.
    pub fn cycle<T>(&self, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let result = f();
        self.finish(started);
        result
    }

    fn finish(&self, started: Instant) {
        if let Some(remaining) = self.period.checked_sub(started.elapsed()) {
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::from_hz(DEFAULT_CLOCK_HZ)
    }
}
