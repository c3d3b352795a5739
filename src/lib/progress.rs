//! Progress tracking utilities
//!
//! A render loop sees absolute step indices and may skip many steps between two
//! polls. [`ProgressTracker`] turns those observations into one log line per
//! interval boundary crossed, no matter how coarse the polling is.

use log::info;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe progress tracker for logging progress at regular intervals.
///
/// # Example
/// ```
/// use sortviz_lib::progress::ProgressTracker;
///
/// let tracker = ProgressTracker::new("Observed steps").with_interval(100);
///
/// // A reader polling frames sees steps 40, 170 and 250.
/// tracker.advance_to(40);
/// tracker.advance_to(170); // Logs "Observed steps 100"
/// tracker.advance_to(250); // Logs "Observed steps 200"
/// tracker.log_final();     // Logs "Observed steps 250 (complete)"
/// assert_eq!(tracker.count(), 250);
/// ```
pub struct ProgressTracker {
    /// Progress is logged when the count crosses multiples of this.
    interval: u64,
    message: String,
    count: AtomicU64,
}

impl ProgressTracker {
    /// Create a new progress tracker with a default interval of 1,000.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { interval: 1_000, message: message.into(), count: AtomicU64::new(0) }
    }

    /// Set the logging interval; zero is treated as one.
    #[must_use]
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval.max(1);
        self
    }

    /// Raise the count to an absolute value, as observed from a frame's step index.
    ///
    /// Observations lower than the current count are ignored, so the count never
    /// goes backwards even if readers race.
    ///
    /// # Returns
    /// `true` if the count changed and landed exactly on an interval.
    pub fn advance_to(&self, total: u64) -> bool {
        let prev = self.count.fetch_max(total, Ordering::Relaxed);
        if total <= prev {
            return false;
        }
        self.log_crossed(prev, total)
    }

    fn log_crossed(&self, prev: u64, new_count: u64) -> bool {
        for i in (prev / self.interval + 1)..=(new_count / self.interval) {
            info!("{} {}", self.message, i * self.interval);
        }
        new_count.is_multiple_of(self.interval)
    }

    /// Log final progress unless the last boundary already logged it.
    pub fn log_final(&self) {
        let count = self.count.load(Ordering::Relaxed);
        if count > 0 && !count.is_multiple_of(self.interval) {
            info!("{} {} (complete)", self.message, count);
        }
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
