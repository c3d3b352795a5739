//! Cocktail shaker sort.

use crate::frame::HighlightTag::{Primary, Secondary};
use crate::instrument::{Interrupted, StepContext, StepResult};

use super::SortAlgorithm;

/// Bubble sort that alternates a forward pass with a backward pass.
///
/// The forward pass carries the largest value to `hi`, the backward pass carries
/// the smallest to `lo`, and both bounds close in until a pass makes no swap.
#[derive(Debug, Clone, Copy, Default)]
pub struct CocktailShakerSort;

impl CocktailShakerSort {
    fn compare_adjacent(ctx: &mut StepContext<'_>, i: usize) -> Result<bool, Interrupted> {
        ctx.checkpoint()?;
        let swap = ctx.greater(i, i + 1);
        if swap {
            ctx.swap(i, i + 1);
        }
        ctx.publish(&[(i, Primary), (i + 1, Secondary)]);
        Ok(swap)
    }
}

impl SortAlgorithm for CocktailShakerSort {
    fn name(&self) -> &'static str {
        "Cocktail Shaker Sort"
    }

    fn sort(&self, ctx: &mut StepContext<'_>) -> StepResult {
        let n = ctx.len();
        if n < 2 {
            return Ok(());
        }
        let (mut lo, mut hi) = (0, n - 1);
        loop {
            let mut swapped = false;
            for i in lo..hi {
                swapped |= Self::compare_adjacent(ctx, i)?;
            }
            if !swapped {
                return Ok(());
            }
            hi -= 1;

            swapped = false;
            for i in (lo..hi).rev() {
                swapped |= Self::compare_adjacent(ctx, i)?;
            }
            if !swapped {
                return Ok(());
            }
            lo += 1;
        }
    }
}
