//! Enhanced logging utilities for formatted output.
//!
//! This module provides consistent, user-friendly logging utilities for run
//! summaries, algorithm comparisons, and operation timing.

use std::time::{Duration, Instant};

use crate::task::{RunSummary, TaskState};

/// Formats an integer with thousands separators.
///
/// # Examples
///
/// ```
/// use sortviz_lib::logging::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a percentage with specified decimal places.
///
/// # Arguments
///
/// * `value` - The fraction (0.0-1.0) to format as percentage
/// * `decimals` - Number of decimal places to include
///
/// # Returns
///
/// A string formatted as "XX.XX%" (e.g., "95.43%")
///
/// # Examples
///
/// ```
/// use sortviz_lib::logging::format_percent;
///
/// assert_eq!(format_percent(0.9543, 2), "95.43%");
/// assert_eq!(format_percent(0.5, 1), "50.0%");
/// assert_eq!(format_percent(1.0, 0), "100%");
/// ```
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0, decimals = decimals)
}

/// Formats a duration in human-readable form.
///
/// # Arguments
///
/// * `duration` - The duration to format
///
/// # Returns
///
/// A human-readable string (e.g., "2m 15s", "1h 30m", "45s")
///
/// # Examples
///
/// ```
/// use sortviz_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(45)), "45s");
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// assert_eq!(format_duration(Duration::from_secs(5400)), "1h 30m");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        if remaining_secs == 0 { format!("{mins}m") } else { format!("{mins}m {remaining_secs}s") }
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 { format!("{hours}h") } else { format!("{hours}h {mins}m") }
    }
}

/// Formats a rate (items per second) with appropriate units.
///
/// # Arguments
///
/// * `count` - Number of items processed
/// * `duration` - Time taken to process items
///
/// # Returns
///
/// A formatted rate string (e.g., "1,234 items/s", "50.0 items/min")
///
/// # Examples
///
/// ```
/// use sortviz_lib::logging::format_rate;
/// use std::time::Duration;
///
/// assert_eq!(format_rate(1000, Duration::from_secs(1)), "1,000 items/s");
/// assert_eq!(format_rate(600, Duration::from_secs(60)), "10 items/s");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_rate(count: u64, duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        return format!("{} items/s", format_count(count));
    }

    let rate = count as f64 / secs;
    if rate >= 1.0 {
        format!("{} items/s", format_count(rate as u64))
    } else {
        let items_per_min = count as f64 / (secs / 60.0);
        format!("{items_per_min:.1} items/min")
    }
}

/// Logs a formatted summary of one run.
///
/// # Examples
///
/// ```no_run
/// use sortviz_lib::algorithms::AlgorithmKind;
/// use sortviz_lib::engine::Engine;
/// use sortviz_lib::control::StepRate;
/// use sortviz_lib::logging::log_run_summary;
///
/// let mut engine = Engine::default();
/// let handle = engine.start(AlgorithmKind::Gnome, StepRate::Unlimited).unwrap();
/// engine.wait(handle, None).unwrap();
/// log_run_summary(&engine.summary(handle).unwrap());
/// ```
pub fn log_run_summary(summary: &RunSummary) {
    log::info!("Run Summary ({}, task {}):", summary.algorithm, summary.task);
    log::info!("  State: {}", summary.state);
    log::info!("  Values: {}", format_count(summary.size as u64));
    log::info!("  Visible steps: {}", format_count(summary.steps));
    log::info!("  Reads: {}", format_count(summary.counters.reads));
    log::info!("  Writes: {}", format_count(summary.counters.writes));
    log::info!("  Comparisons: {}", format_count(summary.counters.comparisons));
    log::info!("  Estimated time: {:.4} ms", summary.counters.estimated_millis());
    log::info!("  Wall time: {}", format_duration(summary.elapsed));
    if summary.elapsed > Duration::ZERO {
        log::info!("  Step rate: {}", format_rate(summary.steps, summary.elapsed));
    }
    if let Some(fault) = &summary.fault {
        log::error!("  Worker fault: {fault}");
    } else if summary.state == TaskState::Cancelled {
        log::warn!("  Run was cancelled before completion");
    }
}

/// Logs a table comparing several runs on the same dataset, cheapest first.
///
/// Each row shows the run's share of the most expensive run's estimated time.
#[allow(clippy::cast_precision_loss)]
pub fn log_comparison_table(summaries: &[RunSummary]) {
    let mut rows: Vec<&RunSummary> = summaries.iter().collect();
    rows.sort_by(|a, b| a.counters.estimated_millis().total_cmp(&b.counters.estimated_millis()));
    let worst = rows.last().map_or(0.0, |s| s.counters.estimated_millis());

    log::info!(
        "{:<22} {:>12} {:>12} {:>12} {:>12} {:>8}",
        "Algorithm",
        "Comparisons",
        "Writes",
        "Reads",
        "Est. ms",
        "Rel."
    );
    for summary in rows {
        let estimate = summary.counters.estimated_millis();
        let relative = if worst > 0.0 { estimate / worst } else { 0.0 };
        log::info!(
            "{:<22} {:>12} {:>12} {:>12} {:>12.4} {:>8}",
            summary.algorithm.to_string(),
            format_count(summary.counters.comparisons),
            format_count(summary.counters.writes),
            format_count(summary.counters.reads),
            estimate,
            format_percent(relative, 1)
        );
    }
}

/// Operation timing and summary helper.
///
/// Tracks operation timing and provides formatted summary output.
///
/// # Examples
///
/// ```no_run
/// use sortviz_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Comparing algorithms");
///
/// // ... do work ...
///
/// timer.log_completion(8); // Log with item count
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Logs the completion with item count and rate.
    pub fn log_completion(&self, count: u64) {
        let duration = self.start_time.elapsed();
        log::info!(
            "{} completed: {} in {} ({})",
            self.operation,
            format_count(count),
            format_duration(duration),
            format_rate(count, duration)
        );
    }
}
