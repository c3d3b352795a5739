//! Cycle sort.
//!
//! Each pass takes the value at `start`, counts how many later values are
//! smaller to find its final position, and swaps it there. The value displaced
//! into `start` is then placed the same way until the cycle closes, that is
//! until the value sitting at `start` belongs at `start`. Runs of equal values
//! are skipped so a duplicate never displaces another copy of itself.
//!
//! Swapping into `start` instead of carrying the displaced value in a register
//! keeps every intermediate array a permutation of the input. The number of
//! writes is at most twice the classic variant's.

use crate::frame::HighlightTag::{Primary, Secondary};
use crate::instrument::{Interrupted, StepContext, StepResult};

use super::SortAlgorithm;

#[derive(Debug, Clone, Copy, Default)]
pub struct CycleSort;

impl CycleSort {
    /// Final position of the value currently at `start`; one visible step.
    fn locate(ctx: &mut StepContext<'_>, start: usize) -> Result<usize, Interrupted> {
        ctx.checkpoint()?;
        let item = ctx.read(start);
        let mut pos = start;
        for i in (start + 1)..ctx.len() {
            let value = ctx.read(i);
            if ctx.less(value, item) {
                pos += 1;
            }
        }
        ctx.publish(&[(start, Primary), (pos, Secondary)]);
        Ok(pos)
    }

    /// Moves the value at `start` to `pos`, past any copies already placed; one visible step.
    fn place(ctx: &mut StepContext<'_>, start: usize, mut pos: usize) -> StepResult {
        ctx.checkpoint()?;
        let item = ctx.read(start);
        loop {
            let occupant = ctx.read(pos);
            if !ctx.equal(occupant, item) {
                break;
            }
            pos += 1;
        }
        ctx.swap(start, pos);
        ctx.publish(&[(pos, Primary), (start, Secondary)]);
        Ok(())
    }
}

impl SortAlgorithm for CycleSort {
    fn name(&self) -> &'static str {
        "Cycle Sort"
    }

    fn sort(&self, ctx: &mut StepContext<'_>) -> StepResult {
        for start in 0..ctx.len().saturating_sub(1) {
            loop {
                let pos = Self::locate(ctx, start)?;
                if pos == start {
                    break;
                }
                Self::place(ctx, start, pos)?;
            }
        }
        Ok(())
    }
}
