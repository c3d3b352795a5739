//! The values being sorted and the generators that produce them.
//!
//! A [`Dataset`] is an ordered sequence of finite `f64` values. Its length is
//! fixed for the lifetime of a run: algorithms only permute values in place.
//! The engine keeps one dataset for generation and shuffling and hands a copy
//! to each run, so the worker never shares storage with the caller.

use clap::ValueEnum;
use rand::Rng;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SortvizError};
use crate::validation::validate_values;

/// How a fresh dataset is populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    /// `i / N` for `i` in `0..N`, already in ascending order.
    #[default]
    Ascending,
    /// The ascending permutation, shuffled.
    Shuffled,
    /// `N` independent uniform values in `[0, 1)`.
    Random,
}

/// Create a random number generator, optionally seeded for reproducibility.
#[must_use]
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// An ordered sequence of finite values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    /// Builds a dataset from caller-supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::InvalidDataset`] if any value is NaN or infinite.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        validate_values(&values)?;
        Ok(Self { values })
    }

    /// Generates a dataset of `size` values.
    pub fn generate(kind: DatasetKind, size: usize, rng: &mut impl Rng) -> Self {
        let values = match kind {
            DatasetKind::Ascending => ascending(size),
            DatasetKind::Shuffled => {
                let mut values = ascending(size);
                values.shuffle(rng);
                values
            }
            DatasetKind::Random => (0..size).map(|_| rng.random::<f64>()).collect(),
        };
        Self { values }
    }

    /// Shuffles the values in place.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.values.shuffle(rng);
    }

    /// The values in their current order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the dataset and returns its values.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if the values are in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        is_non_decreasing(&self.values)
    }

    /// Returns the values in ascending order without modifying the dataset.
    #[must_use]
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut values = self.values.clone();
        values.sort_by(f64::total_cmp);
        values
    }
}

impl TryFrom<Vec<f64>> for Dataset {
    type Error = SortvizError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_values(values)
    }
}

/// Returns true if `values` is in non-decreasing order.
#[must_use]
pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[allow(clippy::cast_precision_loss)]
fn ascending(size: usize) -> Vec<f64> {
    (0..size).map(|i| i as f64 / size as f64).collect()
}
