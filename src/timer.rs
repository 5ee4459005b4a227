//! Main `AutoTimer` entry point and builder.

use crate::config::{Config, LoopCount};
use crate::error::TimingError;
use crate::measurement::{measure, Measurable, TimedClosure, TryTimedClosure};
use crate::result::TimingReport;

/// Entry point for adaptive timing.
///
/// Use the builder pattern to configure and run a measurement. Every
/// invocation is independent; the timer holds configuration, never samples.
///
/// # Example
///
/// ```ignore
/// use autotime::AutoTimer;
///
/// let report = AutoTimer::new()
///     .repeat(5)
///     .max_time(2.0)
///     .time(|| my_function(&input))?;
///
/// println!("fastest batch: {} s per iteration", report.best());
/// ```
///
/// The report prints to stdout by default, exactly like the interactive
/// `%timeit` convenience this mirrors; `.quiet(true)` suppresses it without
/// changing the returned values.
#[derive(Debug, Clone)]
pub struct AutoTimer {
    config: Config,
}

impl Default for AutoTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoTimer {
    /// Create with default configuration.
    ///
    /// Settings:
    /// - 7 batches
    /// - auto-ranged loop count
    /// - 20 s total-time budget
    /// - 3 significant digits
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create with fast configuration for tests and smoke runs.
    ///
    /// Statistically rougher than the default but two orders of magnitude
    /// quicker on cheap operations.
    ///
    /// Settings:
    /// - 3 batches (vs 7 default)
    /// - 0.1 s total-time budget (vs 20 s default)
    pub fn quick() -> Self {
        Self {
            config: Config {
                repeat: 3,
                max_time: 0.1,
                ..Config::default()
            },
        }
    }

    /// Set the number of independent batches.
    pub fn repeat(mut self, n: usize) -> Self {
        self.config.repeat = n;
        self
    }

    /// Fix the loop count per batch, disabling auto-ranging.
    pub fn loops(mut self, n: u64) -> Self {
        self.config.loops = LoopCount::Fixed(n);
        self
    }

    /// Return to auto-ranged loop counts.
    pub fn auto_loops(mut self) -> Self {
        self.config.loops = LoopCount::Auto;
        self
    }

    /// Set the total-time budget, in seconds, for auto-ranging.
    pub fn max_time(mut self, secs: f64) -> Self {
        self.config.max_time = secs;
        self
    }

    /// Set the significant digits used in the printed report.
    pub fn precision(mut self, digits: usize) -> Self {
        self.config.precision = digits;
        self
    }

    /// Suppress or restore the printed report.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.config.quiet = quiet;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Time a closure, adapting it into a batched operation.
    ///
    /// The closure's arguments are bound by capture; each batch times
    /// back-to-back calls as one duration. Prints the report unless quiet.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid configuration; the closure
    /// itself cannot fail.
    pub fn time<F, T>(self, op: F) -> Result<TimingReport, TimingError>
    where
        F: FnMut() -> T,
    {
        self.time_measurable(TimedClosure::new(op))
    }

    /// Time a fallible closure.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid configuration, or
    /// [`TimingError::Operation`] wrapping the closure's first error (the
    /// invocation aborts with no partial result).
    pub fn time_fallible<F, T, E>(self, op: F) -> Result<TimingReport, TimingError>
    where
        F: FnMut() -> Result<T, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        self.time_measurable(TryTimedClosure::new(op))
    }

    /// Time any [`Measurable`], including self-timing collaborators.
    ///
    /// This is the underlying entry point `time` and `time_fallible` adapt
    /// into: validate, sample, summarize, print unless quiet, return the
    /// report.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid configuration, or the
    /// operation's own error propagated unchanged.
    pub fn time_measurable<M: Measurable>(self, mut op: M) -> Result<TimingReport, TimingError> {
        self.config.validate()?;

        let (samples, loops) = measure(
            &mut op,
            self.config.repeat,
            self.config.loops,
            self.config.max_time,
        )?;
        let report = TimingReport::new(samples, loops, self.config.repeat, self.config.precision);

        if !self.config.quiet {
            println!("{report}");
        }
        Ok(report)
    }
}
