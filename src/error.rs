//! Error type for timing invocations.

use thiserror::Error;

/// Errors from configuring or running a timing invocation.
///
/// Configuration errors are raised before any measurement runs; an
/// [`Operation`](TimingError::Operation) error aborts the invocation with no
/// partial result.
#[derive(Debug, Error)]
pub enum TimingError {
    /// `repeat` must allow at least one batch.
    #[error("repeat must be at least 1, got {0}")]
    InvalidRepeat(usize),

    /// A fixed loop count must run at least one iteration per batch.
    #[error("loop count must be at least 1, got {0}")]
    InvalidLoops(u64),

    /// The auto-ranging budget must be a positive, finite number of seconds.
    #[error("max_time must be positive and finite, got {0}")]
    InvalidMaxTime(f64),

    /// The report needs at least one significant digit.
    #[error("precision must be at least 1, got {0}")]
    InvalidPrecision(usize),

    /// The measured operation failed. Propagated unchanged; the invocation
    /// produces no report.
    #[error("measured operation failed: {0}")]
    Operation(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TimingError {
    /// Wraps a failure raised by the measured operation.
    pub fn operation<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Operation(err.into())
    }
}
