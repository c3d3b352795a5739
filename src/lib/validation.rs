//! Input validation utilities
//!
//! This module provides common validation functions for datasets and
//! command-line parameters with consistent error messages.
//!
//! All validation functions use structured error types from [`crate::errors`] to provide
//! rich contextual information when validation fails.

use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::errors::{Result, SortvizError};

/// Validate that every value is finite
///
/// NaN and infinities have no place in a total order, so a dataset containing
/// them could never be reported as sorted.
///
/// # Errors
/// Returns [`SortvizError::InvalidDataset`] naming the first offending index
///
/// # Example
/// ```
/// use sortviz_lib::validation::validate_values;
///
/// validate_values(&[0.5, 0.1, 0.9]).unwrap();
///
/// let result = validate_values(&[0.5, f64::NAN]);
/// assert!(result.is_err());
/// ```
pub fn validate_values(values: &[f64]) -> Result<()> {
    if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SortvizError::InvalidDataset {
            reason: format!("value at index {index} is {value}"),
        });
    }
    Ok(())
}

/// Validate that a value lies within an inclusive range
///
/// # Arguments
/// * `value` - Value to validate
/// * `range` - Allowed range, inclusive at both ends
/// * `name` - Name of the parameter for error messages
///
/// # Errors
/// Returns an error if the value is outside the range
///
/// # Example
/// ```
/// use sortviz_lib::validation::validate_in_range;
///
/// validate_in_range(50, 10..=500, "size").unwrap();
///
/// let result = validate_in_range(5, 10..=500, "size");
/// assert!(result.is_err());
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn validate_in_range<T: PartialOrd + Display>(
    value: T,
    range: RangeInclusive<T>,
    name: &str,
) -> Result<()> {
    if !range.contains(&value) {
        return Err(SortvizError::InvalidParameter {
            parameter: name.to_string(),
            reason: format!("must be between {} and {}, got: {value}", range.start(), range.end()),
        });
    }
    Ok(())
}

/// Validate a dataset size against the allowed bounds
///
/// # Errors
/// Returns an error if `size` is outside `bounds`
pub fn validate_dataset_size(size: usize, bounds: RangeInclusive<usize>) -> Result<()> {
    validate_in_range(size, bounds, "size")
}

/// Validate a paced rate (steps per second) against the allowed bounds
///
/// # Errors
/// Returns an error if `rate` is outside `bounds`
pub fn validate_rate_bounds(rate: u32, bounds: RangeInclusive<u32>) -> Result<()> {
    validate_in_range(rate, bounds, "rate")
}

/// Validate that a value is positive (> 0)
///
/// # Arguments
/// * `value` - Value to validate
/// * `name` - Name of the parameter for error messages
///
/// # Errors
/// Returns an error if the value is not positive
///
/// # Example
/// ```
/// use sortviz_lib::validation::validate_positive;
///
/// validate_positive(10, "poll-ms").unwrap();
///
/// let result = validate_positive(0, "poll-ms");
/// assert!(result.is_err());
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn validate_positive<T: Ord + Display + Default>(value: T, name: &str) -> Result<()> {
    if value <= T::default() {
        return Err(SortvizError::InvalidParameter {
            parameter: name.to_string(),
            reason: format!("Must be positive (> 0), got: {value}"),
        });
    }
    Ok(())
}
