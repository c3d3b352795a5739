//! Metrics collection and reporting for sortviz runs.
//!
//! - [`run`] - One row per finished run (`RunMetric`)
//! - [`frame`] - One row per observed frame (`FrameMetric`)
//! - [`writer`] - Metrics file I/O utilities

use serde::{Deserialize, Serialize};

pub mod frame;
pub mod run;
pub mod writer;

pub use frame::FrameMetric;
pub use run::RunMetric;
pub use writer::write_metrics;

/// Number of decimal places used for float metrics.
pub const FLOAT_PRECISION: usize = 6;

/// Formats a float value with the standard precision for metrics.
///
/// # Example
/// ```
/// use sortviz_lib::metrics::format_float;
/// assert_eq!(format_float(0.9), "0.900000");
/// assert_eq!(format_float(0.0), "0.000000");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    format!("{value:.FLOAT_PRECISION$}")
}

/// A metric type that can be serialized to TSV files.
pub trait Metric: Serialize + for<'de> Deserialize<'de> + Clone + Default {
    /// Human-readable name for this metric type.
    ///
    /// Used in error messages and logging when writing metrics files.
    fn metric_name() -> &'static str;
}
