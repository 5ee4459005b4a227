//! Named defaults and limits for the timing engine.

/// Default number of independent batches per timing invocation.
pub const DEFAULT_REPEAT: usize = 7;

/// Default total-time budget, in seconds, guiding auto-ranging.
///
/// This is a target lower bound for the summed duration of all `repeat`
/// batches, not a hard deadline: a slow operation can overshoot it.
pub const DEFAULT_MAX_TIME: f64 = 20.0;

/// Default number of significant digits in the printed report.
pub const DEFAULT_PRECISION: usize = 3;

/// Upper bound on auto-selected loop counts.
///
/// Guards against a near-zero estimation pass (an operation faster than the
/// clock can resolve) turning into an effectively unbounded commit pass.
/// Applied before snapping, so the committed count stays on the canonical
/// 1/2/5 sequence. Explicitly fixed loop counts are not clamped.
pub const LOOP_COUNT_LIMIT: u64 = 1 << 20;

/// Multipliers of each power of ten forming the canonical step sequence
/// 1, 2, 5, 10, 20, 50, 100, ...
pub const STEP_FACTORS: [u64; 3] = [1, 2, 5];
