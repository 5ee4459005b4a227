//! The measurable-operation boundary and closure adapters.

use std::hint::black_box;
use std::time::Instant;

use crate::error::TimingError;

/// A measurable operation: run a given number of consecutive iterations and
/// report the total elapsed time.
///
/// The engine only chooses loop counts and collects the reported durations;
/// the implementation owns the workload and the clock. [`TimedClosure`] and
/// [`TryTimedClosure`] adapt ordinary closures and time them with a
/// monotonic clock; a `FnMut(u64) -> Result<f64, TimingError>` closure is
/// accepted directly for collaborators that do their own timing.
pub trait Measurable {
    /// Runs `loops` consecutive iterations and returns the total elapsed
    /// seconds (≥ 0).
    ///
    /// # Errors
    ///
    /// Any error aborts the surrounding timing invocation unchanged: no
    /// retry, no partial result.
    fn run(&mut self, loops: u64) -> Result<f64, TimingError>;
}

impl<F> Measurable for F
where
    F: FnMut(u64) -> Result<f64, TimingError>,
{
    fn run(&mut self, loops: u64) -> Result<f64, TimingError> {
        self(loops)
    }
}

/// Adapts an infallible closure into a [`Measurable`].
///
/// Arguments are bound by closure capture: `TimedClosure::new(move ||
/// parse(&input))` times `parse` against that one fixed input. Each `run`
/// call times `loops` back-to-back invocations as a single elapsed duration;
/// return values pass through [`black_box`] so the compiler cannot delete
/// the loop body.
pub struct TimedClosure<F> {
    f: F,
}

impl<F, T> TimedClosure<F>
where
    F: FnMut() -> T,
{
    /// Wraps `f` for repeated timing.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, T> Measurable for TimedClosure<F>
where
    F: FnMut() -> T,
{
    fn run(&mut self, loops: u64) -> Result<f64, TimingError> {
        let start = Instant::now();
        for _ in 0..loops {
            black_box((self.f)());
        }
        Ok(start.elapsed().as_secs_f64())
    }
}

/// Adapts a fallible closure into a [`Measurable`].
///
/// The first `Err` aborts the batch mid-loop and surfaces as
/// [`TimingError::Operation`].
pub struct TryTimedClosure<F> {
    f: F,
}

impl<F, T, E> TryTimedClosure<F>
where
    F: FnMut() -> Result<T, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    /// Wraps `f` for repeated timing.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, T, E> Measurable for TryTimedClosure<F>
where
    F: FnMut() -> Result<T, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn run(&mut self, loops: u64) -> Result<f64, TimingError> {
        let start = Instant::now();
        for _ in 0..loops {
            match (self.f)() {
                Ok(value) => {
                    black_box(value);
                }
                Err(err) => return Err(TimingError::operation(err)),
            }
        }
        Ok(start.elapsed().as_secs_f64())
    }
}
