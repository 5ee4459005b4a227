//! Report rendering: unit scaling, rounding, string composition, JSON.
//!
//! All functions here are pure; the engine decides where the rendered text
//! goes. The report string and the values returned to calling code are
//! deliberately decoupled, so suppressing the print changes nothing about
//! the result.

mod json;
mod report;
mod units;

pub use json::{to_json, to_json_pretty};
pub use report::format_report;
pub use units::{round_significant, scale_unit};
