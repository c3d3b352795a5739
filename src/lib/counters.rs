//! Read, write and comparison counters for one run.

use serde::{Deserialize, Serialize};

/// Cost weights used by the estimated running time, in microseconds per operation.
const WRITE_COST_MICROS: f64 = 0.0167;
const READ_COST_MICROS: f64 = 0.0145;
const COMPARISON_COST_MICROS: f64 = 0.0225;

/// Cumulative operation counts for one sort run.
///
/// Every element access is a read, every value reassignment is a write and
/// every relational test between two values is a comparison. Counts only grow
/// during a run; a new run starts from [`PerformanceCounters::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceCounters {
    pub reads: u64,
    pub writes: u64,
    pub comparisons: u64,
}

impl PerformanceCounters {
    #[inline]
    pub fn add_reads(&mut self, n: u64) {
        self.reads += n;
    }

    #[inline]
    pub fn add_writes(&mut self, n: u64) {
        self.writes += n;
    }

    #[inline]
    pub fn add_comparisons(&mut self, n: u64) {
        self.comparisons += n;
    }

    /// Total number of operations of any kind.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.reads + self.writes + self.comparisons
    }

    /// Estimated running time in milliseconds for an un-instrumented run.
    ///
    /// ```
    /// use sortviz_lib::counters::PerformanceCounters;
    ///
    /// let counters = PerformanceCounters { reads: 1000, writes: 1000, comparisons: 1000 };
    /// assert!((counters.estimated_millis() - 0.0537).abs() < 1e-9);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn estimated_millis(&self) -> f64 {
        (WRITE_COST_MICROS * self.writes as f64
            + READ_COST_MICROS * self.reads as f64
            + COMPARISON_COST_MICROS * self.comparisons as f64)
            / 1000.0
    }

    /// Returns true if no counter in `self` is smaller than in `earlier`.
    #[must_use]
    pub fn dominates(&self, earlier: &Self) -> bool {
        self.reads >= earlier.reads
            && self.writes >= earlier.writes
            && self.comparisons >= earlier.comparisons
    }
}
