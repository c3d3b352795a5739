//! Gnome sort.

use crate::frame::HighlightTag::{Primary, Secondary};
use crate::instrument::{StepContext, StepResult};

use super::SortAlgorithm;

/// Walks forward while neighbors are in order; on an inversion, swaps and steps back.
#[derive(Debug, Clone, Copy, Default)]
pub struct GnomeSort;

impl SortAlgorithm for GnomeSort {
    fn name(&self) -> &'static str {
        "Gnome Sort"
    }

    fn sort(&self, ctx: &mut StepContext<'_>) -> StepResult {
        let n = ctx.len();
        let mut pos = 1;
        while pos < n {
            ctx.checkpoint()?;
            if ctx.greater(pos - 1, pos) {
                ctx.swap(pos - 1, pos);
                ctx.publish(&[(pos - 1, Primary), (pos, Secondary)]);
                pos = (pos - 1).max(1);
            } else {
                ctx.publish(&[(pos, Primary), (pos - 1, Secondary)]);
                pos += 1;
            }
        }
        Ok(())
    }
}
