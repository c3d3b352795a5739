//! Comb sort.

use crate::frame::HighlightTag::{Primary, Secondary};
use crate::instrument::{StepContext, StepResult};

use super::SortAlgorithm;

/// Bubble sort over a gap that shrinks by a factor of 1.3 each pass.
///
/// Runs until the gap has reached 1 and a full pass at gap 1 makes no swap.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombSort;

/// Next gap: `max(1, gap * 10 / 13)`.
fn shrink(gap: usize) -> usize {
    (gap * 10 / 13).max(1)
}

impl SortAlgorithm for CombSort {
    fn name(&self) -> &'static str {
        "Comb Sort"
    }

    fn sort(&self, ctx: &mut StepContext<'_>) -> StepResult {
        let n = ctx.len();
        if n < 2 {
            return Ok(());
        }
        let mut gap = n;
        let mut swapped = true;
        while gap > 1 || swapped {
            gap = shrink(gap);
            swapped = false;
            for i in 0..(n - gap) {
                ctx.checkpoint()?;
                if ctx.greater(i, i + gap) {
                    ctx.swap(i, i + gap);
                    swapped = true;
                }
                ctx.publish(&[(i, Primary), (i + gap, Secondary)]);
            }
        }
        Ok(())
    }
}
