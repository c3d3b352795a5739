//! Per-run metrics written by the `run` and `compare` commands.

use serde::{Deserialize, Serialize};

use super::{Metric, format_float};
use crate::algorithms::AlgorithmKind;
use crate::task::{RunSummary, TaskState};

/// Outcome and cost of one sort run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetric {
    /// Engine-issued task number
    pub task: u64,

    /// Algorithm that was run
    pub algorithm: AlgorithmKind,

    /// Number of values sorted
    pub size: usize,

    /// Terminal (or current) task state
    pub state: TaskState,

    /// Visible steps published
    pub steps: u64,

    /// Element reads
    pub reads: u64,

    /// Element writes
    pub writes: u64,

    /// Relational tests between two values
    pub comparisons: u64,

    /// Estimated un-instrumented running time in milliseconds
    pub estimated_ms: String,

    /// Wall time of the instrumented run in seconds
    pub elapsed_secs: String,

    /// Panic message if the worker crashed
    pub fault: Option<String>,
}

impl Metric for RunMetric {
    fn metric_name() -> &'static str {
        "run"
    }
}

impl From<&RunSummary> for RunMetric {
    fn from(summary: &RunSummary) -> Self {
        Self {
            task: summary.task.id(),
            algorithm: summary.algorithm,
            size: summary.size,
            state: summary.state,
            steps: summary.steps,
            reads: summary.counters.reads,
            writes: summary.counters.writes,
            comparisons: summary.counters.comparisons,
            estimated_ms: format_float(summary.counters.estimated_millis()),
            elapsed_secs: format_float(summary.elapsed.as_secs_f64()),
            fault: summary.fault.clone(),
        }
    }
}
