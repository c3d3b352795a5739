//! Selection sort.

use crate::frame::HighlightTag::{Primary, Secondary};
use crate::instrument::{StepContext, StepResult};

use super::SortAlgorithm;

/// For each position, scans the unsorted remainder for its minimum and swaps it into place.
///
/// Every scan comparison is a visible step with the scanned element as
/// `Primary` and the minimum it was compared against as `Secondary`. The closing swap is a step
/// of its own and is skipped when the minimum is already in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn sort(&self, ctx: &mut StepContext<'_>) -> StepResult {
        let n = ctx.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in (i + 1)..n {
                ctx.checkpoint()?;
                let candidate = ctx.read(j);
                let current = ctx.read(min);
                let compared = min;
                if ctx.less(candidate, current) {
                    min = j;
                }
                ctx.publish(&[(j, Primary), (compared, Secondary)]);
            }
            if min != i {
                ctx.checkpoint()?;
                ctx.swap(i, min);
                ctx.publish(&[(i, Primary), (min, Secondary)]);
            }
        }
        Ok(())
    }
}
