//! The instrumentation contract every sorting algorithm runs against.
//!
//! An algorithm never touches its data directly. It receives a [`StepContext`]
//! that owns the working copy and routes every access through a counting
//! method, so reads, writes and comparisons are tallied identically for all
//! algorithms. A visible step is bracketed by two calls:
//!
//! 1. [`StepContext::checkpoint`] waits for the pacing deadline and then polls the
//!    cancel flag; it returns [`Interrupted`] if the run should stop.
//! 2. [`StepContext::publish`] recomputes the highlight tags from scratch, pushes a
//!    new frame to the publisher and starts the pacing clock for the next step.
//!
//! All data movement is done with [`StepContext::swap`], so every published frame
//! is a permutation of the input even when a run is cancelled mid-way.

use std::time::Instant;

use log::trace;

use crate::control::TaskControl;
use crate::counters::PerformanceCounters;
use crate::frame::{Frame, HighlightTag};
use crate::publisher::StepPublisher;

/// Marker returned when an algorithm stops early because its task was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

/// Outcome of a visible step or of a whole algorithm run.
pub type StepResult = Result<(), Interrupted>;

/// Working copy plus instrumentation for one run.
pub struct StepContext<'a> {
    values: Vec<f64>,
    counters: PerformanceCounters,
    steps: u64,
    last_step: Instant,
    control: &'a TaskControl,
    publisher: &'a StepPublisher,
}

impl<'a> StepContext<'a> {
    /// Creates a context that owns `values` and reports to `publisher`.
    ///
    /// The pacing clock starts now, so the first visible step is due one interval
    /// after construction.
    #[must_use]
    pub fn new(values: Vec<f64>, control: &'a TaskControl, publisher: &'a StepPublisher) -> Self {
        Self {
            values,
            counters: PerformanceCounters::default(),
            steps: 0,
            last_step: Instant::now(),
            control,
            publisher,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads the value at `index`.
    #[inline]
    pub fn read(&mut self, index: usize) -> f64 {
        self.counters.add_reads(1);
        self.values[index]
    }

    /// Reads both values and tests `values[i] > values[j]`.
    #[inline]
    pub fn greater(&mut self, i: usize, j: usize) -> bool {
        let a = self.read(i);
        let b = self.read(j);
        self.less(b, a)
    }

    /// Tests `a < b` on values that were already read.
    #[inline]
    pub fn less(&mut self, a: f64, b: f64) -> bool {
        self.counters.add_comparisons(1);
        a < b
    }

    /// Tests `a == b` on values that were already read.
    #[inline]
    #[allow(clippy::float_cmp)]
    pub fn equal(&mut self, a: f64, b: f64) -> bool {
        self.counters.add_comparisons(1);
        a == b
    }

    /// Exchanges two elements: two reads and two writes.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        let a = self.read(i);
        let b = self.read(j);
        self.values[i] = b;
        self.values[j] = a;
        self.counters.add_writes(2);
    }

    /// Waits for the next step to be due, then polls for cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] when the task has been cancelled.
    pub fn checkpoint(&mut self) -> StepResult {
        if self.control.wait_for_step(self.last_step) { Ok(()) } else { Err(Interrupted) }
    }

    /// Ends a visible step: publishes the current values with only `touched` highlighted.
    pub fn publish(&mut self, touched: &[(usize, HighlightTag)]) {
        self.steps += 1;
        let frame = Frame::with_touched(self.steps, self.values.clone(), touched, self.counters);
        trace!(
            "step {}: {} reads, {} writes, {} comparisons",
            self.steps,
            self.counters.reads,
            self.counters.writes,
            self.counters.comparisons
        );
        self.publisher.publish(frame);
        self.last_step = Instant::now();
    }

    /// Publishes the terminal frame with every element tagged `Done`.
    ///
    /// Does not count as a visible step.
    pub fn finish(&mut self) {
        self.publisher.publish(Frame::uniform(
            self.steps,
            self.values.clone(),
            HighlightTag::Done,
            self.counters,
        ));
    }

    #[must_use]
    pub fn counters(&self) -> PerformanceCounters {
        self.counters
    }

    /// Number of visible steps published so far.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
