//! Insertion sort.

use crate::frame::HighlightTag::{Primary, Secondary};
use crate::instrument::{StepContext, StepResult};

use super::SortAlgorithm;

/// Grows a sorted prefix by sinking each new element left until its predecessor
/// is no larger.
///
/// The element is moved by adjacent swaps rather than by shifting predecessors
/// into a gap, so every published frame holds exactly the input values. One
/// visible step is one shift comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn sort(&self, ctx: &mut StepContext<'_>) -> StepResult {
        for i in 1..ctx.len() {
            let mut j = i;
            while j > 0 {
                ctx.checkpoint()?;
                let shift = ctx.greater(j - 1, j);
                if shift {
                    ctx.swap(j - 1, j);
                    ctx.publish(&[(j - 1, Primary), (j, Secondary)]);
                    j -= 1;
                } else {
                    ctx.publish(&[(j, Primary), (j - 1, Secondary)]);
                    break;
                }
            }
        }
        Ok(())
    }
}
