//! Bubble sort.

use crate::frame::HighlightTag::{Primary, Secondary};
use crate::instrument::{StepContext, StepResult};

use super::SortAlgorithm;

/// Repeated adjacent-pair sweeps until a full pass makes no swap.
///
/// Each sweep bubbles the largest remaining value to the end of the unsorted
/// range, so the range shrinks by one after every pass. One visible step is one
/// adjacent comparison plus its swap, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn sort(&self, ctx: &mut StepContext<'_>) -> StepResult {
        let mut end = ctx.len();
        if end < 2 {
            return Ok(());
        }
        loop {
            let mut swapped = false;
            for i in 1..end {
                ctx.checkpoint()?;
                if ctx.greater(i - 1, i) {
                    ctx.swap(i - 1, i);
                    swapped = true;
                }
                ctx.publish(&[(i - 1, Secondary), (i, Primary)]);
            }
            if !swapped {
                return Ok(());
            }
            end -= 1;
        }
    }
}
