//! Report string composition.

use crate::output::units::{round_significant, scale_unit};

/// Composes the one-line timing report.
///
/// `mean` and `std_dev` are per-iteration seconds. Each side of the `±` is
/// unit-scaled and rounded independently, so a millisecond mean can carry a
/// microsecond spread.
pub fn format_report(
    mean: f64,
    std_dev: f64,
    repeat: usize,
    loops: u64,
    precision: usize,
) -> String {
    let (mean, mean_unit) = scale_unit(mean);
    let mean = round_significant(mean, precision);
    let (std_dev, std_unit) = scale_unit(std_dev);
    let std_dev = round_significant(std_dev, precision);

    format!(
        "{mean} {mean_unit} ± {std_dev} {std_unit} per loop \
         (mean ± std. dev. of {repeat} runs, {loops} loops each)"
    )
}
