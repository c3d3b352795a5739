//! The engine: composition root between a front end and the sort machinery.
//!
//! An [`Engine`] owns the caller-visible dataset (the one that is generated and
//! shuffled) and at most one [`SortTask`]. Starting a run hands the task a copy
//! of a dataset, so the worker's working array is never shared with the engine.
//! All reads a render loop needs ([`Engine::latest_frame`], [`Engine::state`])
//! are non-blocking.
//!
//! A task must be terminal before it can be replaced. [`Engine::start_run`]
//! retires a terminal task implicitly; [`Engine::retire`] does it explicitly and
//! returns the run's summary. Handles of retired tasks are rejected with
//! [`SortvizError::UnknownTask`].

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;

use crate::algorithms::AlgorithmKind;
use crate::control::StepRate;
use crate::dataset::{Dataset, DatasetKind, create_rng};
use crate::errors::{Result, SortvizError};
use crate::frame::Frame;
use crate::task::{RunSummary, SortTask, TaskHandle, TaskState};

/// Smallest dataset the size control allows.
pub const MIN_DATASET_SIZE: usize = 10;
/// Largest dataset the size control allows.
pub const MAX_DATASET_SIZE: usize = 500;
/// Default dataset size.
pub const DEFAULT_DATASET_SIZE: usize = 50;
/// Slowest rate the speed control allows, in steps per second.
pub const MIN_STEPS_PER_SECOND: u32 = 10;
/// Fastest rate the speed control allows, in steps per second.
pub const MAX_STEPS_PER_SECOND: u32 = 240;

/// Initial engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub dataset_size: usize,
    pub dataset_kind: DatasetKind,
    pub rate: StepRate,
    /// Seed for dataset generation and shuffling; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dataset_size: DEFAULT_DATASET_SIZE,
            dataset_kind: DatasetKind::default(),
            rate: StepRate::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_dataset_size(mut self, size: usize) -> Self {
        self.dataset_size = size;
        self
    }

    #[must_use]
    pub fn with_dataset_kind(mut self, kind: DatasetKind) -> Self {
        self.dataset_kind = kind;
        self
    }

    #[must_use]
    pub fn with_rate(mut self, rate: StepRate) -> Self {
        self.rate = rate;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Owns the current dataset and the current task.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    dataset: Dataset,
    task: Option<SortTask>,
    next_id: u64,
    rng: StdRng,
}

impl Engine {
    /// Creates an engine and generates its initial dataset from `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut rng = create_rng(config.seed);
        let dataset = Dataset::generate(config.dataset_kind, config.dataset_size, &mut rng);
        Self { config, dataset, task: None, next_id: 1, rng }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The engine-visible dataset, i.e. what the next run will sort by default.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Replaces the dataset with a freshly generated one.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::Busy`] while a task is running.
    pub fn generate(&mut self, kind: DatasetKind, size: usize) -> Result<&Dataset> {
        self.ensure_idle()?;
        self.dataset = Dataset::generate(kind, size, &mut self.rng);
        debug!("Generated {kind:?} dataset of {size} values");
        Ok(&self.dataset)
    }

    /// Shuffles the dataset in place.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::Busy`] while a task is running.
    pub fn shuffle(&mut self) -> Result<&Dataset> {
        self.ensure_idle()?;
        self.dataset.shuffle(&mut self.rng);
        Ok(&self.dataset)
    }

    /// Replaces the dataset with caller-supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::Busy`] while a task is running.
    pub fn set_dataset(&mut self, dataset: Dataset) -> Result<()> {
        self.ensure_idle()?;
        self.dataset = dataset;
        Ok(())
    }

    /// Starts `algorithm` on a copy of `dataset` and returns the new task's handle.
    ///
    /// A terminal task from a previous run is retired first.
    ///
    /// # Errors
    ///
    /// * [`SortvizError::Busy`] if the current task is still running; that task
    ///   is left untouched.
    /// * [`SortvizError::Spawn`] if the worker thread cannot be created.
    pub fn start_run(
        &mut self,
        algorithm: AlgorithmKind,
        dataset: &Dataset,
        rate: StepRate,
    ) -> Result<TaskHandle> {
        self.ensure_idle()?;
        if let Some(previous) = self.task.take() {
            let summary = previous.summary();
            debug!("Retiring task {} ({})", summary.task, summary.state);
        }

        let handle = TaskHandle::new(self.next_id);
        self.next_id += 1;
        let mut task = SortTask::new(handle, algorithm, dataset.clone(), rate);
        let started = task.start();
        // Keep even a task that failed to spawn so its state stays queryable.
        self.task = Some(task);
        started.map(|()| handle)
    }

    /// Starts `algorithm` on the engine's own dataset.
    ///
    /// # Errors
    ///
    /// See [`Engine::start_run`].
    pub fn start(&mut self, algorithm: AlgorithmKind, rate: StepRate) -> Result<TaskHandle> {
        let dataset = self.dataset.clone();
        self.start_run(algorithm, &dataset, rate)
    }

    /// Requests cooperative cancellation. Idempotent on terminal tasks.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::UnknownTask`] for a retired or foreign handle.
    pub fn cancel(&self, handle: TaskHandle) -> Result<()> {
        self.task(handle)?.cancel();
        Ok(())
    }

    /// The task's most recent frame; `None` if no frame has been published yet.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::UnknownTask`] for a retired or foreign handle.
    pub fn latest_frame(&self, handle: TaskHandle) -> Result<Option<Arc<Frame>>> {
        Ok(self.task(handle)?.latest())
    }

    /// Changes the task's pacing; takes effect before its next step.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::UnknownTask`] for a retired or foreign handle.
    pub fn set_rate(&self, handle: TaskHandle, rate: StepRate) -> Result<()> {
        let task = self.task(handle)?;
        task.set_rate(rate);
        debug!("Task {handle} rate set to {}", rate.describe());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SortvizError::UnknownTask`] for a retired or foreign handle.
    pub fn state(&self, handle: TaskHandle) -> Result<TaskState> {
        Ok(self.task(handle)?.state())
    }

    /// Blocks the calling thread until the task is terminal or `timeout` elapses.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::UnknownTask`] for a retired or foreign handle.
    pub fn wait(&self, handle: TaskHandle, timeout: Option<Duration>) -> Result<TaskState> {
        Ok(self.task(handle)?.wait(timeout))
    }

    /// # Errors
    ///
    /// Returns [`SortvizError::UnknownTask`] for a retired or foreign handle.
    pub fn summary(&self, handle: TaskHandle) -> Result<RunSummary> {
        Ok(self.task(handle)?.summary())
    }

    /// Discards a terminal task, joining its worker, and returns its summary.
    ///
    /// # Errors
    ///
    /// * [`SortvizError::UnknownTask`] for a retired or foreign handle.
    /// * [`SortvizError::Busy`] if the task is still running.
    pub fn retire(&mut self, handle: TaskHandle) -> Result<RunSummary> {
        let task = self.task(handle)?;
        if task.state() == TaskState::Running {
            return Err(SortvizError::Busy { task: handle });
        }
        let mut task = self.task.take().ok_or(SortvizError::UnknownTask { task: handle })?;
        task.join();
        let summary = task.summary();
        info!(
            "Retired task {handle}: {} {} after {} steps",
            summary.algorithm, summary.state, summary.steps
        );
        Ok(summary)
    }

    /// Handle of the current task, if any.
    #[must_use]
    pub fn current(&self) -> Option<TaskHandle> {
        self.task.as_ref().map(SortTask::handle)
    }

    /// Returns true while the current task is running.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.task.as_ref().is_some_and(|t| t.state() == TaskState::Running)
    }

    fn task(&self, handle: TaskHandle) -> Result<&SortTask> {
        self.task
            .as_ref()
            .filter(|t| t.handle() == handle)
            .ok_or(SortvizError::UnknownTask { task: handle })
    }

    fn ensure_idle(&self) -> Result<()> {
        match &self.task {
            Some(task) if task.state() == TaskState::Running => {
                Err(SortvizError::Busy { task: task.handle() })
            }
            _ => Ok(()),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
