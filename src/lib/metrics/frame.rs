//! Per-frame trace rows written by `run --trace`.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::Metric;
use crate::dataset::is_non_decreasing;
use crate::frame::{Frame, HighlightTag};

/// One frame as observed by a polling reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMetric {
    /// Visible step index of the frame
    pub step: u64,
    pub reads: u64,
    pub writes: u64,
    pub comparisons: u64,
    /// Comma-separated indices tagged `Primary`
    pub primary: String,
    /// Comma-separated indices tagged `Secondary`
    pub secondary: String,
    /// True once every element is tagged `Done`
    pub done: bool,
    /// True if the frame's values are in non-decreasing order
    pub sorted: bool,
}

impl Metric for FrameMetric {
    fn metric_name() -> &'static str {
        "frame trace"
    }
}

impl From<&Frame> for FrameMetric {
    fn from(frame: &Frame) -> Self {
        Self {
            step: frame.step,
            reads: frame.counters.reads,
            writes: frame.counters.writes,
            comparisons: frame.counters.comparisons,
            primary: frame.indices_with(HighlightTag::Primary).iter().join(","),
            secondary: frame.indices_with(HighlightTag::Secondary).iter().join(","),
            done: frame.is_done(),
            sorted: is_non_decreasing(&frame.values),
        }
    }
}
