//! Sample-set reduction to per-iteration statistics.

/// Reduces a sample set to `(mean, std_dev)` per iteration.
///
/// `samples` holds one total elapsed duration per batch, every batch having
/// run the same `loops` iterations, so per-iteration mean is
/// `sum / (len * loops)` and per-iteration standard deviation is the sample
/// standard deviation of the batch durations divided by `loops`.
///
/// `loops` must be at least 1 (the sampler guarantees this).
pub fn summarize(samples: &[f64], loops: u64) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 0.0);
    }
    let loops = loops as f64;
    let mean = samples.iter().sum::<f64>() / (samples.len() as f64 * loops);
    let std_dev = sample_std_dev(samples) / loops;
    (mean, std_dev)
}

/// Sample standard deviation (n − 1 denominator).
///
/// Undefined by the usual formula below two samples; defined as 0.0 here so
/// a single-batch invocation reports a spread of zero instead of failing.
pub fn sample_std_dev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    let variance =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    variance.sqrt()
}
