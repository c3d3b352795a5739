//! Custom error types for sortviz operations.

use thiserror::Error;

use crate::task::{TaskHandle, TaskState};

/// Result type alias for sortviz operations
pub type Result<T> = std::result::Result<T, SortvizError>;

/// Error type for sortviz operations
#[derive(Error, Debug)]
pub enum SortvizError {
    /// A run was requested while another task is still running
    #[error("Task {task} is still running; cancel it or wait for it to finish")]
    Busy {
        /// The task that currently owns the engine
        task: TaskHandle,
    },

    /// The dataset handed to the engine is structurally invalid
    #[error("Invalid dataset: {reason}")]
    InvalidDataset {
        /// Explanation of why it's invalid
        reason: String,
    },

    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// The handle was never issued by this engine or has already been retired
    #[error("Unknown task {task}")]
    UnknownTask {
        /// The stale handle
        task: TaskHandle,
    },

    /// The requested state transition is not allowed from the task's current state
    #[error("Task {task} cannot be started from state {state}")]
    InvalidTransition {
        /// The task
        task: TaskHandle,
        /// The state the task was in
        state: TaskState,
    },

    /// The worker thread could not be spawned
    #[error("Failed to spawn sort worker: {0}")]
    Spawn(#[from] std::io::Error),
}

impl SortvizError {
    /// Convenience constructor for [`SortvizError::InvalidParameter`].
    pub fn invalid_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { parameter: parameter.into(), reason: reason.into() }
    }
}
