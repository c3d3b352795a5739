//! The eight instrumented sorting algorithms.
//!
//! Each algorithm is a unit struct implementing [`SortAlgorithm`]. The
//! [`Sorter`] enum dispatches statically over all of them, and
//! [`AlgorithmKind`] is the user-facing selector parsed from the command line.
//!
//! All algorithms sort ascending in place and honor the same step contract (see
//! [`crate::instrument`]): a visible step starts with
//! [`StepContext::checkpoint`](crate::instrument::StepContext::checkpoint) and
//! ends with [`StepContext::publish`](crate::instrument::StepContext::publish).
//! Equal elements are never swapped. Inputs of length 0 or 1 return at once
//! without any step.

use std::fmt;

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::control::{StepRate, TaskControl};
use crate::counters::PerformanceCounters;
use crate::instrument::{StepContext, StepResult};
use crate::publisher::StepPublisher;

pub mod bubble;
pub mod cocktail;
pub mod comb;
pub mod cycle;
pub mod gnome;
pub mod insertion;
pub mod selection;
pub mod shell;

pub use bubble::BubbleSort;
pub use cocktail::CocktailShakerSort;
pub use comb::CombSort;
pub use cycle::CycleSort;
pub use gnome::GnomeSort;
pub use insertion::InsertionSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;

/// Stepping logic shared by every algorithm.
#[enum_dispatch]
pub trait SortAlgorithm {
    /// Display name of the algorithm.
    fn name(&self) -> &'static str;

    /// Sorts the context's working copy in place.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`](crate::instrument::Interrupted) if the task was
    /// cancelled at a step boundary; the working copy is then left mid-permutation.
    fn sort(&self, ctx: &mut StepContext<'_>) -> StepResult;
}

/// Static dispatch over the concrete algorithms.
#[enum_dispatch(SortAlgorithm)]
#[derive(Debug, Clone, Copy)]
pub enum Sorter {
    BubbleSort,
    CocktailShakerSort,
    GnomeSort,
    InsertionSort,
    SelectionSort,
    ShellSort,
    CombSort,
    CycleSort,
}

/// Algorithm selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// Adjacent-pair sweeps until a pass makes no swap.
    #[default]
    Bubble,
    /// Bubble sort alternating forward and backward passes.
    Cocktail,
    /// Walks forward, stepping back one position after each swap.
    Gnome,
    /// Sinks each new element into the sorted prefix.
    Insertion,
    /// Scans the remainder for its minimum and swaps it into place.
    Selection,
    /// Insertion sort over a halving gap sequence.
    Shell,
    /// Bubble sort with a gap shrinking by a factor of 1.3.
    Comb,
    /// Places each cycle start at its final position by counting smaller elements.
    Cycle,
}

impl AlgorithmKind {
    /// Every algorithm, in menu order.
    #[must_use]
    pub fn all() -> &'static [AlgorithmKind] {
        &[
            Self::Bubble,
            Self::Cocktail,
            Self::Gnome,
            Self::Insertion,
            Self::Selection,
            Self::Shell,
            Self::Comb,
            Self::Cycle,
        ]
    }

    /// Returns the implementation for this kind.
    #[must_use]
    pub fn sorter(self) -> Sorter {
        match self {
            Self::Bubble => BubbleSort.into(),
            Self::Cocktail => CocktailShakerSort.into(),
            Self::Gnome => GnomeSort.into(),
            Self::Insertion => InsertionSort.into(),
            Self::Selection => SelectionSort.into(),
            Self::Shell => ShellSort.into(),
            Self::Comb => CombSort.into(),
            Self::Cycle => CycleSort.into(),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sorter().name())
    }
}

/// Result of running an algorithm to completion without pacing.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub values: Vec<f64>,
    pub counters: PerformanceCounters,
    pub steps: u64,
}

/// Runs `kind` over `values` on the calling thread at unlimited rate.
///
/// Useful for benchmarks and for comparing algorithms where only the final
/// counters matter. Frames are still built so the cost matches a real run.
#[must_use]
pub fn execute(kind: AlgorithmKind, values: Vec<f64>) -> Execution {
    let control = TaskControl::new(StepRate::Unlimited);
    let publisher = StepPublisher::new();
    let mut ctx = StepContext::new(values, &control, &publisher);
    // The control is private to this call and never cancelled.
    let _ = kind.sorter().sort(&mut ctx);
    ctx.finish();
    Execution { counters: ctx.counters(), steps: ctx.steps(), values: ctx.into_values() }
}
