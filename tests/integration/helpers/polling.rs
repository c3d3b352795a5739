//! Engine setup and frame polling shared by the integration tests.

use std::path::Path;
use std::process::Command;
use std::sync::Arc;
use std::time::{Duration, Instant};

use sortviz_lib::dataset::Dataset;
use sortviz_lib::engine::{Engine, EngineConfig};
use sortviz_lib::frame::Frame;
use sortviz_lib::task::{TaskHandle, TaskState};

/// Builds an engine holding exactly `values`.
pub fn engine_with(values: &[f64]) -> Engine {
    let mut engine = Engine::new(EngineConfig::default().with_seed(Some(42)));
    let dataset = Dataset::from_values(values.to_vec()).expect("test values are finite");
    engine.set_dataset(dataset).expect("a fresh engine is idle");
    engine
}

/// Polls `handle` until it is terminal, collecting every distinct frame seen.
///
/// Panics if the task is still running after `limit`.
pub fn poll_until_terminal(
    engine: &Engine,
    handle: TaskHandle,
    limit: Duration,
) -> (TaskState, Vec<Arc<Frame>>) {
    let deadline = Instant::now() + limit;
    let mut frames: Vec<Arc<Frame>> = Vec::new();
    loop {
        let state = engine.state(handle).expect("handle is live");
        if let Some(frame) = engine.latest_frame(handle).expect("handle is live") {
            if frames.last().is_none_or(|last| !Arc::ptr_eq(last, &frame)) {
                frames.push(frame);
            }
        }
        if state.is_terminal() {
            return (state, frames);
        }
        assert!(Instant::now() < deadline, "task {handle} still running after {limit:?}");
        std::thread::sleep(Duration::from_millis(1));
    }
}

/// Runs the `sortviz` binary with `args`, returning whether it succeeded.
pub fn run_sortviz(args: &[&str]) -> bool {
    Command::new(env!("CARGO_BIN_EXE_sortviz"))
        .args(args)
        .status()
        .expect("Failed to run sortviz")
        .success()
}

/// Converts a path to the `&str` form the CLI expects.
pub fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}
