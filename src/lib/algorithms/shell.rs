//! Shell sort over the halving gap sequence.

use crate::frame::HighlightTag::{Primary, Secondary};
use crate::instrument::{StepContext, StepResult};

use super::SortAlgorithm;

/// Gapped insertion sort with gaps `n/2, n/4, ..., 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSort;

impl SortAlgorithm for ShellSort {
    fn name(&self) -> &'static str {
        "Shell Sort"
    }

    fn sort(&self, ctx: &mut StepContext<'_>) -> StepResult {
        let n = ctx.len();
        let mut gap = n / 2;
        while gap > 0 {
            for i in gap..n {
                let mut j = i;
                while j >= gap {
                    ctx.checkpoint()?;
                    let shift = ctx.greater(j - gap, j);
                    if shift {
                        ctx.swap(j - gap, j);
                    }
                    ctx.publish(&[(j, Primary), (j - gap, Secondary)]);
                    if !shift {
                        break;
                    }
                    j -= gap;
                }
            }
            gap /= 2;
        }
        Ok(())
    }
}
