//! The `SortTask` state machine: one background worker running one algorithm.
//!
//! ```text
//! Idle --start--> Running --algorithm returns--> Completed
//!   |                |
//!   |                +------cancel observed-----> Cancelled
//!   +-------------------cancel------------------> Cancelled
//! ```
//!
//! `Completed` and `Cancelled` are terminal. A terminal task is never restarted;
//! the engine discards it and builds a new one.
//!
//! The terminal state is decided by the worker when it exits, so a task reports
//! `Running` until the worker has actually observed a cancel request at a step
//! boundary. Because a cancel wakes a pacing worker immediately, that lag is at
//! most one step's worth of work. A worker that panics is caught and ends the
//! task `Cancelled`, with the panic message available from [`SortTask::fault`].

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};

use crate::algorithms::{AlgorithmKind, SortAlgorithm};
use crate::control::{StepRate, TaskControl};
use crate::counters::PerformanceCounters;
use crate::dataset::Dataset;
use crate::errors::{Result, SortvizError};
use crate::frame::{Frame, HighlightTag};
use crate::instrument::{Interrupted, StepContext};
use crate::publisher::StepPublisher;

/// Opaque identifier of one run, issued by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskHandle(u64);

impl TaskHandle {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of a [`SortTask`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TaskState {
    #[default]
    Idle = 0,
    Running = 1,
    Completed = 2,
    Cancelled = 3,
}

impl TaskState {
    /// Returns true for `Completed` and `Cancelled`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Idle,
            1 => Self::Running,
            2 => Self::Completed,
            _ => Self::Cancelled,
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Snapshot of a task's outcome (or progress, while it is still running).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub task: TaskHandle,
    pub algorithm: AlgorithmKind,
    pub size: usize,
    pub state: TaskState,
    /// Visible steps published so far.
    pub steps: u64,
    pub counters: PerformanceCounters,
    /// Wall time since the worker started, or the full run time once terminal.
    pub elapsed: Duration,
    /// Panic message of a crashed worker.
    pub fault: Option<String>,
}

/// State shared between the task owner and its worker thread.
#[derive(Debug)]
struct Shared {
    state: AtomicU8,
    control: TaskControl,
    publisher: StepPublisher,
    /// Filled in by the worker right before it leaves `Running`.
    finish: Mutex<Option<Finish>>,
    finished: Condvar,
}

#[derive(Debug, Clone)]
struct Finish {
    elapsed: Duration,
    fault: Option<String>,
}

impl Shared {
    fn state(&self) -> TaskState {
        TaskState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Moves `from` to `to` if the task is still in `from`.
    fn transition(&self, from: TaskState, to: TaskState) -> bool {
        self.state
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn complete(&self, state: TaskState, finish: Finish) {
        let mut slot = self.finish.lock();
        *slot = Some(finish);
        self.state.store(state as u8, Ordering::Release);
        self.finished.notify_all();
    }
}

/// One run of one algorithm on one dataset.
pub struct SortTask {
    handle: TaskHandle,
    algorithm: AlgorithmKind,
    size: usize,
    /// Taken by `start`.
    dataset: Option<Dataset>,
    started: Option<Instant>,
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl SortTask {
    /// Creates an `Idle` task that will sort a private copy of `dataset`.
    #[must_use]
    pub fn new(
        handle: TaskHandle,
        algorithm: AlgorithmKind,
        dataset: Dataset,
        rate: StepRate,
    ) -> Self {
        Self {
            handle,
            algorithm,
            size: dataset.len(),
            dataset: Some(dataset),
            started: None,
            shared: Arc::new(Shared {
                state: AtomicU8::new(TaskState::Idle as u8),
                control: TaskControl::new(rate),
                publisher: StepPublisher::new(),
                finish: Mutex::new(None),
                finished: Condvar::new(),
            }),
            worker: None,
        }
    }

    /// Spawns the worker and moves the task to `Running`.
    ///
    /// The step-0 frame (the unsorted input, all `Idle`, zero counters) is
    /// published before this returns, so [`SortTask::latest`] is never empty for
    /// a started task.
    ///
    /// # Errors
    ///
    /// * [`SortvizError::Busy`] if the task is already running.
    /// * [`SortvizError::InvalidTransition`] if the task is terminal.
    /// * [`SortvizError::Spawn`] if the worker thread cannot be created; the task
    ///   is then `Cancelled`.
    pub fn start(&mut self) -> Result<()> {
        let state = self.state();
        match state {
            TaskState::Idle => {}
            TaskState::Running => return Err(SortvizError::Busy { task: self.handle }),
            TaskState::Completed | TaskState::Cancelled => {
                return Err(SortvizError::InvalidTransition { task: self.handle, state });
            }
        }
        let Some(dataset) = self.dataset.take() else {
            return Err(SortvizError::InvalidTransition { task: self.handle, state });
        };
        let values = dataset.into_values();
        self.shared.publisher.publish(Frame::uniform(
            0,
            values.clone(),
            HighlightTag::Idle,
            PerformanceCounters::default(),
        ));

        if !self.shared.transition(TaskState::Idle, TaskState::Running) {
            // Cancelled between the state check and here.
            return Err(SortvizError::InvalidTransition { task: self.handle, state: self.state() });
        }
        let started = Instant::now();
        self.started = Some(started);

        let shared = Arc::clone(&self.shared);
        let (handle, algorithm) = (self.handle, self.algorithm);
        let spawned = thread::Builder::new()
            .name(format!("sortviz-task-{}", handle.id()))
            .spawn(move || run_worker(&shared, handle, algorithm, values, started));
        match spawned {
            Ok(worker) => {
                info!(
                    "Started task {handle}: {algorithm} on {} values at {}",
                    self.size,
                    self.shared.control.rate().describe()
                );
                self.worker = Some(worker);
                Ok(())
            }
            Err(e) => {
                self.shared.complete(
                    TaskState::Cancelled,
                    Finish { elapsed: Duration::ZERO, fault: Some(e.to_string()) },
                );
                Err(e.into())
            }
        }
    }

    /// Requests cancellation. Idempotent; a no-op on a terminal task.
    ///
    /// An `Idle` task becomes `Cancelled` at once. A `Running` task becomes
    /// `Cancelled` when its worker reaches the next step boundary.
    pub fn cancel(&self) {
        if self.shared.transition(TaskState::Idle, TaskState::Cancelled) {
            self.shared
                .complete(TaskState::Cancelled, Finish { elapsed: Duration::ZERO, fault: None });
            debug!("Cancelled task {} before it started", self.handle);
            return;
        }
        if self.state() == TaskState::Running && !self.shared.control.is_cancelled() {
            debug!("Cancel requested for task {}", self.handle);
            self.shared.control.cancel();
        }
    }

    /// Changes the pacing; takes effect before the next step.
    pub fn set_rate(&self, rate: StepRate) {
        self.shared.control.set_rate(rate);
    }

    #[must_use]
    pub fn rate(&self) -> StepRate {
        self.shared.control.rate()
    }

    /// The most recent frame, without blocking. `None` until the task is started.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<Frame>> {
        self.shared.publisher.latest()
    }

    #[must_use]
    pub fn state(&self) -> TaskState {
        self.shared.state()
    }

    #[must_use]
    pub fn handle(&self) -> TaskHandle {
        self.handle
    }

    #[must_use]
    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Number of values being sorted.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Panic message of a crashed worker, if any.
    #[must_use]
    pub fn fault(&self) -> Option<String> {
        self.shared.finish.lock().as_ref().and_then(|f| f.fault.clone())
    }

    /// Blocks until the task is terminal or `timeout` elapses, and returns the state.
    ///
    /// Returns immediately for a task that was never started. With no timeout,
    /// waits for as long as the run takes.
    pub fn wait(&self, timeout: Option<Duration>) -> TaskState {
        let deadline = timeout.map(|t| Instant::now() + t);
        let mut slot = self.shared.finish.lock();
        while self.state() == TaskState::Running {
            match deadline {
                Some(deadline) => {
                    if self.shared.finished.wait_until(&mut slot, deadline).timed_out() {
                        break;
                    }
                }
                None => self.shared.finished.wait(&mut slot),
            }
        }
        self.state()
    }

    /// Current summary; counters and step count come from the latest frame.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let state = self.state();
        let (steps, counters) =
            self.latest().map_or((0, PerformanceCounters::default()), |f| (f.step, f.counters));
        let finish = self.shared.finish.lock().clone();
        let elapsed = match (&finish, self.started) {
            (Some(finish), _) => finish.elapsed,
            (None, Some(started)) => started.elapsed(),
            (None, None) => Duration::ZERO,
        };
        RunSummary {
            task: self.handle,
            algorithm: self.algorithm,
            size: self.size,
            state,
            steps,
            counters,
            elapsed,
            fault: finish.and_then(|f| f.fault),
        }
    }

    /// Joins the worker thread if the task is terminal.
    pub(crate) fn join(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Worker for task {} exited abnormally", self.handle);
            }
        }
    }
}

impl fmt::Debug for SortTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortTask")
            .field("handle", &self.handle)
            .field("algorithm", &self.algorithm)
            .field("size", &self.size)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl Drop for SortTask {
    fn drop(&mut self) {
        self.cancel();
        self.join();
    }
}

fn run_worker(
    shared: &Shared,
    handle: TaskHandle,
    algorithm: AlgorithmKind,
    values: Vec<f64>,
    started: Instant,
) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut ctx = StepContext::new(values, &shared.control, &shared.publisher);
        let result = algorithm.sorter().sort(&mut ctx);
        if result.is_ok() {
            ctx.finish();
        }
        result
    }));
    let elapsed = started.elapsed();

    let (state, fault) = match outcome {
        Ok(Ok(())) => {
            info!("Task {handle} completed in {elapsed:.2?}");
            (TaskState::Completed, None)
        }
        Ok(Err(Interrupted)) => {
            warn!("Task {handle} cancelled after {elapsed:.2?}");
            (TaskState::Cancelled, None)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!("Task {handle} worker crashed: {message}");
            (TaskState::Cancelled, Some(message))
        }
    };
    shared.complete(state, Finish { elapsed, fault });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
