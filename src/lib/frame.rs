//! Published visualization frames.

use serde::{Deserialize, Serialize};

use crate::counters::PerformanceCounters;

/// Per-element visual state in a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightTag {
    /// Not touched by the current step.
    #[default]
    Idle,
    /// The left/first operand of the current step (e.g. the element being moved).
    Primary,
    /// The right/second operand of the current step (e.g. the element compared against).
    Secondary,
    /// Terminal state of every element once a run completes.
    Done,
}

/// One immutable snapshot of a run: values, highlights and counters at a visible step.
///
/// `values` and `highlights` always have the same length, equal to the length
/// of the dataset the run started with. Frames are built whole and never
/// patched after publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Number of visible steps completed when this frame was published.
    pub step: u64,
    pub values: Vec<f64>,
    pub highlights: Vec<HighlightTag>,
    pub counters: PerformanceCounters,
}

impl Frame {
    /// Builds a frame where every element carries `tag`.
    #[must_use]
    pub fn uniform(
        step: u64,
        values: Vec<f64>,
        tag: HighlightTag,
        counters: PerformanceCounters,
    ) -> Self {
        let highlights = vec![tag; values.len()];
        Self { step, values, highlights, counters }
    }

    /// Builds a frame where `touched` indices carry their tag and all others are `Idle`.
    ///
    /// Out-of-range indices are ignored. When an index appears more than once the
    /// last tag wins.
    #[must_use]
    pub fn with_touched(
        step: u64,
        values: Vec<f64>,
        touched: &[(usize, HighlightTag)],
        counters: PerformanceCounters,
    ) -> Self {
        let mut highlights = vec![HighlightTag::Idle; values.len()];
        for &(index, tag) in touched {
            if let Some(slot) = highlights.get_mut(index) {
                *slot = tag;
            }
        }
        Self { step, values, highlights, counters }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Indices carrying `tag`, in ascending order.
    #[must_use]
    pub fn indices_with(&self, tag: HighlightTag) -> Vec<usize> {
        self.highlights.iter().enumerate().filter(|(_, t)| **t == tag).map(|(i, _)| i).collect()
    }

    /// Returns true if every element is tagged `Done`.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.highlights.iter().all(|t| *t == HighlightTag::Done)
    }
}
