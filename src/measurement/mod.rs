//! Measurement layer: the operation boundary and the adaptive sampler.
//!
//! This module provides:
//! - The [`Measurable`] boundary trait: run N consecutive iterations, report
//!   total elapsed seconds
//! - Closure adapters that loop and time with a monotonic clock
//!   ([`TimedClosure`], [`TryTimedClosure`])
//! - The adaptive sampler ([`measure`]) that picks a loop count and collects
//!   one duration per batch
//!
//! Everything here is synchronous and blocking: batches run strictly one
//! after another, and auto-ranging's estimation pass must finish before the
//! commit pass can be sized.

mod operation;
mod sampler;

pub use operation::{Measurable, TimedClosure, TryTimedClosure};
pub use sampler::measure;
