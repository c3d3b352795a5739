//! Common CLI options shared across commands.
//!
//! This module provides shared argument structures that can be composed into
//! command structs using `#[command(flatten)]`.

use anyhow::{Context, Result};
use clap::Args;

use sortviz_lib::control::StepRate;
use sortviz_lib::dataset::{Dataset, DatasetKind, create_rng};
use sortviz_lib::engine::{
    DEFAULT_DATASET_SIZE, EngineConfig, MAX_DATASET_SIZE, MAX_STEPS_PER_SECOND, MIN_DATASET_SIZE,
    MIN_STEPS_PER_SECOND,
};
use sortviz_lib::validation::{validate_dataset_size, validate_rate_bounds};

/// Options describing the dataset to sort.
#[derive(Debug, Clone, Args)]
pub struct DatasetOptions {
    /// Number of values to generate
    #[arg(short = 'n', long = "size", default_value_t = DEFAULT_DATASET_SIZE)]
    pub size: usize,

    /// How generated values are laid out
    #[arg(short = 'd', long = "dataset", value_enum, default_value_t = DatasetKind::Shuffled)]
    pub kind: DatasetKind,

    /// Random seed for reproducible datasets
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Explicit comma-separated values to sort instead of generating them
    #[arg(
        long = "values",
        value_delimiter = ',',
        num_args = 1..,
        conflicts_with_all = ["size", "kind"]
    )]
    pub values: Option<Vec<f64>>,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self { size: DEFAULT_DATASET_SIZE, kind: DatasetKind::Shuffled, seed: None, values: None }
    }
}

impl DatasetOptions {
    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns an error if a generated size is outside the allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.values.is_none() {
            validate_dataset_size(self.size, MIN_DATASET_SIZE..=MAX_DATASET_SIZE)?;
        }
        Ok(())
    }

    /// Engine settings matching these options.
    #[must_use]
    pub fn engine_config(&self, rate: StepRate) -> EngineConfig {
        EngineConfig::default()
            .with_dataset_size(self.size)
            .with_dataset_kind(self.kind)
            .with_seed(self.seed)
            .with_rate(rate)
    }

    /// Builds the dataset: the explicit values if given, otherwise a generated one.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or an explicit value is not finite.
    pub fn build(&self) -> Result<Dataset> {
        self.validate()?;
        match &self.values {
            Some(values) => Dataset::from_values(values.clone()).context("Invalid --values"),
            None => Ok(Dataset::generate(self.kind, self.size, &mut create_rng(self.seed))),
        }
    }
}

/// Options controlling the step rate.
#[derive(Debug, Clone, Args)]
pub struct RateOptions {
    /// Visible steps per second, or `unlimited`
    #[arg(short = 'r', long = "rate", default_value_t = StepRate::default())]
    pub rate: StepRate,
}

impl Default for RateOptions {
    fn default() -> Self {
        Self { rate: StepRate::default() }
    }
}

impl RateOptions {
    /// Returns the validated rate.
    ///
    /// # Errors
    ///
    /// Returns an error if a paced rate is outside the allowed range.
    pub fn rate(&self) -> Result<StepRate> {
        if let Some(steps) = self.rate.steps_per_second() {
            validate_rate_bounds(steps, MIN_STEPS_PER_SECOND..=MAX_STEPS_PER_SECOND)?;
        }
        Ok(self.rate)
    }
}
