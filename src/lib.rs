//! # autotime
//!
//! `%timeit`-style adaptive timing for ordinary Rust code.
//!
//! Hand this crate a closure and it measures the cost of one iteration
//! without being told up front how expensive the closure is:
//! - Auto-ranges the loop count per batch so the whole measurement lands
//!   near a configurable time budget
//! - Repeats the batched measurement for a distribution (7 batches by
//!   default)
//! - Reports `mean ± std. dev.` per iteration with auto-scaled units and
//!   significant-digit rounding
//!
//! ## ⚠️ Auto-Ranging Runs the Operation Many Times
//!
//! Cost discovery probes the closure before committing to a loop count, and
//! the committed count can reach a million loops per batch for cheap
//! operations. Make sure the operation is safe to run repeatedly, or bound
//! the repetition yourself:
//!
//! ```ignore
//! // ❌ RISKY - auto-ranging decides how often this side effect happens
//! autotime::time_operation(|| append_audit_record(&mut log))?;
//!
//! // ✅ BOUNDED - one batch, one loop, no probing
//! AutoTimer::new().repeat(1).loops(1).time(|| append_audit_record(&mut log))?;
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use autotime::AutoTimer;
//!
//! // Prints: 12.3 µs ± 45.6 ns per loop (mean ± std. dev. of 7 runs, 20000 loops each)
//! let report = AutoTimer::new().time(|| parse(&input))?;
//!
//! // The raw distribution stays available on the report.
//! println!("total: {} s, fastest batch: {} s/iter", report.total_seconds(), report.best());
//! ```
//!
//! The printed line and the returned values are decoupled: quiet mode
//! changes nothing about the report itself.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod result;
mod timer;

// Functional modules
pub mod measurement;
pub mod output;
pub mod stats;

// Re-exports for public API
pub use config::{Config, LoopCount};
pub use constants::{DEFAULT_MAX_TIME, DEFAULT_PRECISION, DEFAULT_REPEAT, LOOP_COUNT_LIMIT};
pub use error::TimingError;
pub use measurement::{Measurable, TimedClosure, TryTimedClosure};
pub use result::TimingReport;
pub use timer::AutoTimer;

/// Convenience function for timing a closure with default configuration.
///
/// Runs the full default pipeline (auto-ranging, 7 batches, 20 s budget),
/// prints the report, and returns the total elapsed seconds across all
/// batches: `sum(samples)`, not the per-iteration mean. Use [`AutoTimer`]
/// when you need the full [`TimingReport`] or non-default settings.
///
/// ```ignore
/// let total = autotime::time_operation(|| checksum(&payload))?;
/// ```
///
/// # Errors
///
/// The default configuration always validates and the adapted closure cannot
/// fail, so the error arm is unreachable in practice; the `Result` keeps the
/// signature aligned with the [`AutoTimer`] entry points.
pub fn time_operation<F, T>(op: F) -> Result<f64, TimingError>
where
    F: FnMut() -> T,
{
    let report = AutoTimer::new().time(op)?;
    Ok(report.total_seconds())
}

/// Times an expression.
///
/// `time_it!(expr)` wraps the expression in a closure and times it with the
/// default configuration, returning the total elapsed seconds like
/// [`time_operation`]. `time_it!(timer, expr)` times it with a configured
/// [`AutoTimer`] and returns the full [`TimingReport`].
///
/// ```ignore
/// let total = time_it!(fib(20))?;
/// let report = time_it!(AutoTimer::quick().quiet(true), fib(20))?;
/// ```
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! time_it {
    ($timer:expr, $body:expr $(,)?) => {
        $crate::AutoTimer::time($timer, || $body)
    };
    ($body:expr $(,)?) => {
        $crate::time_operation(|| $body)
    };
}
