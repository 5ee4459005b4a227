//! The timing report returned by a measurement.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::output::format_report;
use crate::stats::summarize;

/// Result of one timing invocation.
///
/// Owns the raw batch durations so the distribution stays inspectable after
/// the measurement; the per-iteration statistics are derived on demand.
/// `Display` renders the one-line report, and `total_seconds` carries the
/// decoupled programmatic result (the raw summed time, independent of any
/// rounding applied for display).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingReport {
    samples: Vec<f64>,
    loops: u64,
    repeat: usize,
    precision: usize,
}

impl TimingReport {
    pub(crate) fn new(samples: Vec<f64>, loops: u64, repeat: usize, precision: usize) -> Self {
        Self {
            samples,
            loops,
            repeat,
            precision,
        }
    }

    /// Raw elapsed seconds per batch, one entry per repeat.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Loop count every batch ran at.
    pub fn loops(&self) -> u64 {
        self.loops
    }

    /// Number of independent batches.
    pub fn repeat(&self) -> usize {
        self.repeat
    }

    /// Total elapsed seconds across all batches.
    pub fn total_seconds(&self) -> f64 {
        self.samples.iter().sum()
    }

    /// Mean seconds per iteration.
    pub fn mean(&self) -> f64 {
        summarize(&self.samples, self.loops).0
    }

    /// Sample standard deviation of the batches, per iteration.
    ///
    /// Zero when fewer than two batches were collected.
    pub fn std_dev(&self) -> f64 {
        summarize(&self.samples, self.loops).1
    }

    /// Fastest batch, per iteration.
    pub fn best(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min) / self.loops as f64
    }

    /// Slowest batch, per iteration.
    pub fn worst(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max) / self.loops as f64
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mean, std_dev) = summarize(&self.samples, self.loops);
        f.write_str(&format_report(
            mean,
            std_dev,
            self.repeat,
            self.loops,
            self.precision,
        ))
    }
}
