//! Configuration for timing invocations.

use crate::constants::{DEFAULT_MAX_TIME, DEFAULT_PRECISION, DEFAULT_REPEAT};
use crate::error::TimingError;

/// Configuration options for [`AutoTimer`](crate::AutoTimer).
#[derive(Debug, Clone)]
pub struct Config {
    /// Independent batches per invocation (default: 7).
    ///
    /// Every batch runs the same loop count; the batch durations form the
    /// sample set the statistics are computed from.
    pub repeat: usize,

    /// Loop count per batch (default: Auto).
    ///
    /// `Auto` discovers a count large enough that all `repeat` batches
    /// together take at least `max_time` seconds. `Fixed(n)` skips
    /// auto-ranging and runs exactly `n` loops per batch, however fast or
    /// slow that turns out to be.
    pub loops: LoopCount,

    /// Target lower bound, in seconds, for the total time spent across all
    /// batches when the loop count is auto-selected (default: 20.0).
    ///
    /// A budget, not a deadline: an operation whose single iteration already
    /// exceeds it still runs to completion at loop count 1.
    pub max_time: f64,

    /// Significant digits in the printed report (default: 3).
    pub precision: usize,

    /// Suppress the printed report (default: false).
    ///
    /// The returned report and total are unaffected.
    pub quiet: bool,
}

/// Loop count selection for each batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCount {
    /// Discover a suitable count by auto-ranging.
    ///
    /// One estimation pass at loop count 1 sizes the workload; the chosen
    /// count is snapped to the canonical 1, 2, 5, 10, 20, 50, ... sequence
    /// so displayed counts stay round and comparable across runs.
    Auto,

    /// Run exactly N loops per batch, no adaptation.
    Fixed(u64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repeat: DEFAULT_REPEAT,
            loops: LoopCount::Auto,
            max_time: DEFAULT_MAX_TIME,
            precision: DEFAULT_PRECISION,
            quiet: false,
        }
    }
}

impl Default for LoopCount {
    fn default() -> Self {
        Self::Auto
    }
}

impl Config {
    /// Checks the caller contract before any measurement runs.
    ///
    /// # Errors
    ///
    /// Returns the matching [`TimingError`] variant for a zero `repeat`, a
    /// zero fixed loop count, a non-positive or non-finite `max_time`, or a
    /// zero `precision`.
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.repeat == 0 {
            return Err(TimingError::InvalidRepeat(self.repeat));
        }
        if self.loops == LoopCount::Fixed(0) {
            return Err(TimingError::InvalidLoops(0));
        }
        if !self.max_time.is_finite() || self.max_time <= 0.0 {
            return Err(TimingError::InvalidMaxTime(self.max_time));
        }
        if self.precision == 0 {
            return Err(TimingError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}
