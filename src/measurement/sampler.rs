//! Adaptive selection of the loop count per batch.
//!
//! Auto-ranging is a two-phase probe/commit design: one estimation pass at
//! loop count 1 sizes the workload, then the commit pass re-measures at a
//! count chosen so all batches together land near the time budget. The
//! chosen count is snapped down to the canonical 1, 2, 5, 10, 20, 50, ...
//! sequence so displayed counts stay round and comparable across runs.

use crate::config::LoopCount;
use crate::constants::{LOOP_COUNT_LIMIT, STEP_FACTORS};
use crate::error::TimingError;

use super::operation::Measurable;

/// Collects `repeat` batch durations from `op`, choosing the loop count.
///
/// With [`LoopCount::Fixed`] this is purely mechanical: `op` runs exactly
/// `repeat` times at the given count, however fast or slow each batch turns
/// out to be. With [`LoopCount::Auto`] the count is discovered so that the
/// batches together take at least `max_time` seconds (a budget, not a
/// deadline). Returns the batch durations and the loop count they were all
/// collected at.
///
/// # Errors
///
/// Any failure from `op` aborts immediately with no partial result, during
/// either the estimation or the commit pass.
pub fn measure<M: Measurable>(
    op: &mut M,
    repeat: usize,
    loops: LoopCount,
    max_time: f64,
) -> Result<(Vec<f64>, u64), TimingError> {
    match loops {
        LoopCount::Fixed(n) => Ok((run_batches(op, repeat, n)?, n)),
        LoopCount::Auto => auto_range(op, repeat, max_time),
    }
}

/// Discovers a loop count without prior knowledge of per-iteration cost.
fn auto_range<M: Measurable>(
    op: &mut M,
    repeat: usize,
    max_time: f64,
) -> Result<(Vec<f64>, u64), TimingError> {
    // Estimation pass: one iteration per batch sizes the workload. Floor the
    // total at EPSILON so an operation faster than the clock can resolve
    // yields a large finite candidate instead of a division by zero.
    let estimate = run_batches(op, repeat, 1)?;
    let total_estimate = estimate.iter().sum::<f64>().max(f64::EPSILON);

    let candidate = (max_time / total_estimate).round().max(1.0);
    if candidate <= 1.0 {
        // The estimation pass already satisfies the budget; committing again
        // would double the total time for nothing.
        return Ok((estimate, 1));
    }

    let candidate = if candidate > LOOP_COUNT_LIMIT as f64 {
        eprintln!(
            "[WARNING] auto-ranging wants {candidate:.0} loops per batch (limit: \
             {LOOP_COUNT_LIMIT}); the operation is too fast to fill the {max_time} s budget"
        );
        LOOP_COUNT_LIMIT
    } else {
        candidate as u64
    };

    let loops = snap_down(candidate);
    let samples = run_batches(op, repeat, loops)?;
    Ok((samples, loops))
}

/// Runs `repeat` consecutive batches at a fixed loop count.
fn run_batches<M: Measurable>(
    op: &mut M,
    repeat: usize,
    loops: u64,
) -> Result<Vec<f64>, TimingError> {
    let mut samples = Vec::with_capacity(repeat);
    for _ in 0..repeat {
        samples.push(op.run(loops)?);
    }
    Ok(samples)
}

/// Snaps `candidate` down to the canonical 1, 2, 5, 10, 20, 50, ... sequence.
///
/// Walks the sequence upward and returns the last member not exceeding
/// `candidate`, so 37 becomes 20 and a member maps to itself. `candidate`
/// must be at least 1 and at most [`LOOP_COUNT_LIMIT`].
fn snap_down(candidate: u64) -> u64 {
    let mut snapped = 1;
    let mut scale = 1u64;
    loop {
        for factor in STEP_FACTORS {
            let step = factor * scale;
            if step > candidate {
                return snapped;
            }
            snapped = step;
        }
        scale *= 10;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::cell::Cell;

    /// Deterministic operation reporting `per_loop` seconds per iteration,
    /// counting invocations and recording the last loop count it saw.
    fn fake_op<'a>(
        per_loop: f64,
        calls: &'a Cell<usize>,
        last_loops: &'a Cell<u64>,
    ) -> impl FnMut(u64) -> Result<f64, TimingError> + 'a {
        move |loops| {
            calls.set(calls.get() + 1);
            last_loops.set(loops);
            Ok(per_loop * loops as f64)
        }
    }

    fn is_canonical(n: u64) -> bool {
        let mut m = n;
        while m % 10 == 0 {
            m /= 10;
        }
        matches!(m, 1 | 2 | 5)
    }

    #[test]
    fn test_snap_down_walks_the_sequence() {
        assert_eq!(snap_down(1), 1);
        assert_eq!(snap_down(3), 2);
        assert_eq!(snap_down(37), 20);
        assert_eq!(snap_down(999), 500);
        assert_eq!(snap_down(1_048_576), 1_000_000);
    }

    #[test]
    fn test_snap_down_keeps_sequence_members() {
        for member in [1, 2, 5, 10, 20, 50, 100, 200, 500, 1_000] {
            assert_eq!(snap_down(member), member);
        }
    }

    #[test]
    fn test_fixed_path_is_mechanical() {
        let calls = Cell::new(0);
        let last_loops = Cell::new(0);
        let mut op = fake_op(0.5, &calls, &last_loops);

        let (samples, loops) = measure(&mut op, 5, LoopCount::Fixed(42), 20.0).unwrap();

        assert_eq!(calls.get(), 5);
        assert_eq!(last_loops.get(), 42);
        assert_eq!(loops, 42);
        assert_eq!(samples, vec![21.0; 5]);
    }

    #[test]
    fn test_auto_commits_at_snapped_count() {
        let calls = Cell::new(0);
        let last_loops = Cell::new(0);
        let mut op = fake_op(0.01, &calls, &last_loops);

        // Estimation total is 0.07 s, so the candidate is round(20 / 0.07) =
        // 286, which snaps down to 200.
        let (samples, loops) = measure(&mut op, 7, LoopCount::Auto, 20.0).unwrap();

        assert_eq!(loops, 200);
        assert_eq!(calls.get(), 14);
        assert_eq!(samples.len(), 7);
        assert!(samples.iter().all(|&s| (s - 2.0).abs() < 1e-12));
    }

    #[test]
    fn test_auto_keeps_estimation_pass_when_budget_is_met() {
        let calls = Cell::new(0);
        let last_loops = Cell::new(0);
        let mut op = fake_op(10.0, &calls, &last_loops);

        let (samples, loops) = measure(&mut op, 3, LoopCount::Auto, 0.05).unwrap();

        // A single iteration already exceeds the budget: the estimation
        // samples come back as-is and no commit pass runs.
        assert_eq!(loops, 1);
        assert_eq!(calls.get(), 3);
        assert_eq!(samples, vec![10.0; 3]);
    }

    #[test]
    fn test_auto_snaps_candidates_downward() {
        // One batch at 1.0 s per loop makes the candidate equal to max_time.
        let calls = Cell::new(0);
        let last_loops = Cell::new(0);

        let mut op = fake_op(1.0, &calls, &last_loops);
        let (_, loops) = measure(&mut op, 1, LoopCount::Auto, 37.0).unwrap();
        assert_eq!(loops, 20);

        let mut op = fake_op(1.0, &calls, &last_loops);
        let (_, loops) = measure(&mut op, 1, LoopCount::Auto, 3.0).unwrap();
        assert_eq!(loops, 2);
    }

    #[test]
    fn test_auto_ranging_is_idempotent() {
        let calls = Cell::new(0);
        let last_loops = Cell::new(0);

        let mut op = fake_op(0.01, &calls, &last_loops);
        let (_, first) = measure(&mut op, 7, LoopCount::Auto, 20.0).unwrap();

        let mut op = fake_op(0.01, &calls, &last_loops);
        let (_, second) = measure(&mut op, 7, LoopCount::Auto, 20.0).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_estimate_clamps_to_canonical_limit() {
        let calls = Cell::new(0);
        let last_loops = Cell::new(0);
        let mut op = fake_op(0.0, &calls, &last_loops);

        let (_, loops) = measure(&mut op, 3, LoopCount::Auto, 20.0).unwrap();

        // An instantaneous operation would ask for ~9e16 loops; the clamp
        // lands on the canonical member just below 1 << 20.
        assert_eq!(loops, 1_000_000);
        assert_eq!(calls.get(), 6);
    }

    #[test]
    fn test_fixed_count_is_not_clamped() {
        let calls = Cell::new(0);
        let last_loops = Cell::new(0);
        let mut op = fake_op(0.0, &calls, &last_loops);

        let limit = LOOP_COUNT_LIMIT * 4;
        let (_, loops) = measure(&mut op, 1, LoopCount::Fixed(limit), 20.0).unwrap();

        assert_eq!(loops, limit);
        assert_eq!(last_loops.get(), limit);
    }

    #[test]
    fn test_error_during_estimation_propagates() {
        let mut op = |_loops: u64| -> Result<f64, TimingError> {
            Err(TimingError::operation("probe failed"))
        };

        let err = measure(&mut op, 3, LoopCount::Auto, 20.0).unwrap_err();
        assert!(matches!(err, TimingError::Operation(_)));
    }

    #[test]
    fn test_error_during_commit_propagates() {
        let calls = Cell::new(0);
        let mut op = |loops: u64| -> Result<f64, TimingError> {
            calls.set(calls.get() + 1);
            if calls.get() > 3 {
                Err(TimingError::operation("commit failed"))
            } else {
                Ok(0.01 * loops as f64)
            }
        };

        let err = measure(&mut op, 3, LoopCount::Auto, 20.0).unwrap_err();

        assert!(matches!(err, TimingError::Operation(_)));
        // The estimation pass succeeded; the first commit batch failed.
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_jittered_estimates_still_choose_canonical_counts() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut op = move |loops: u64| -> Result<f64, TimingError> {
            let jitter: f64 = rng.random_range(0.95..1.05);
            Ok(0.01 * jitter * loops as f64)
        };

        let (samples, loops) = measure(&mut op, 7, LoopCount::Auto, 20.0).unwrap();

        // Up to ±5% noise moves the candidate around 286 but never past the
        // neighboring sequence members.
        assert_eq!(loops, 200);
        assert!(is_canonical(loops));
        assert_eq!(samples.len(), 7);
    }
}
