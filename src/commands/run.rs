//! Run one algorithm on one dataset while polling frames like a renderer would.
//!
//! The command stands in for a graphical front end: it starts a task, then
//! reads the latest frame on a fixed tick, independently of the worker's pace.
//! Each distinct frame it observes can be written to a trace file.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use clap::Parser;
use crossbeam_channel::tick;
use log::{info, warn};
use sortviz_lib::algorithms::AlgorithmKind;
use sortviz_lib::dataset::is_non_decreasing;
use sortviz_lib::engine::Engine;
use sortviz_lib::logging::log_run_summary;
use sortviz_lib::metrics::writer::write_metrics_auto;
use sortviz_lib::metrics::{FrameMetric, RunMetric};
use sortviz_lib::progress::ProgressTracker;
use sortviz_lib::task::TaskState;
use sortviz_lib::validation::validate_positive;

use crate::commands::command::Command;
use crate::commands::common::{DatasetOptions, RateOptions};

/// Run a single sorting algorithm with live frame polling.
#[derive(Debug, Parser)]
#[command(
    name = "run",
    about = "\x1b[38;5;72m[VISUALIZE]\x1b[0m      \x1b[36mRun one algorithm and poll its frames\x1b[0m",
    long_about = r#"
Run one sorting algorithm on a generated or explicit dataset.

The algorithm runs on a background worker, paced to --rate visible steps per
second. This command polls the latest published frame every --poll-ms
milliseconds, the way a renderer would, and logs progress as it goes.

A run that does not finish within --timeout-secs is cancelled cooperatively.
The command fails if a completed run did not produce sorted output.

Example usage:
  sortviz run -a bubble -n 50 --rate 60
  sortviz run -a cycle --values 3,1,4,1,5 --rate unlimited --trace frames.tsv
  sortviz run -a selection -n 200 --rate 240 --timeout-secs 5 --metrics run.tsv
"#
)]
pub struct Run {
    /// Algorithm to run
    #[arg(short = 'a', long = "algorithm", value_enum)]
    pub algorithm: AlgorithmKind,

    /// Dataset options
    #[command(flatten)]
    pub dataset: DatasetOptions,

    /// Step rate options
    #[command(flatten)]
    pub rate: RateOptions,

    /// Milliseconds between two frame polls
    #[arg(long = "poll-ms", default_value = "16")]
    pub poll_ms: u64,

    /// Cancel the run if it has not finished after this many seconds
    #[arg(long = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    /// Optional TSV of every distinct frame observed while polling
    #[arg(long = "trace")]
    pub trace: Option<PathBuf>,

    /// Optional TSV with the run summary
    #[arg(long = "metrics")]
    pub metrics: Option<PathBuf>,
}

impl Command for Run {
    fn execute(&self, _command_line: &str) -> Result<()> {
        validate_positive(self.poll_ms, "poll-ms")?;
        if let Some(secs) = self.timeout_secs {
            validate_positive(secs, "timeout-secs")?;
        }
        let rate = self.rate.rate()?;
        let dataset = self.dataset.build()?;

        info!("Starting Run");
        info!("Algorithm: {}", self.algorithm);
        info!("Values: {}", dataset.len());
        info!("Rate: {}", rate.describe());
        if let Some(seed) = self.dataset.seed {
            info!("Random seed: {seed}");
        }

        let mut engine = Engine::new(self.dataset.engine_config(rate));
        engine.set_dataset(dataset)?;
        let handle = engine.start(self.algorithm, rate)?;

        let ticker = tick(Duration::from_millis(self.poll_ms));
        let deadline = self.timeout_secs.map(|s| Instant::now() + Duration::from_secs(s));
        let progress = ProgressTracker::new("Observed step").with_interval(1_000);
        let mut trace: Vec<FrameMetric> = Vec::new();
        let mut last_seen: Option<(u64, bool)> = None;
        let mut cancel_sent = false;

        loop {
            ticker.recv()?;
            // Read the state before the frame: a terminal state guarantees the frame is final.
            let state = engine.state(handle)?;
            if let Some(frame) = engine.latest_frame(handle)? {
                let seen = (frame.step, frame.is_done());
                if last_seen != Some(seen) {
                    last_seen = Some(seen);
                    progress.advance_to(frame.step);
                    if self.trace.is_some() {
                        trace.push(FrameMetric::from(frame.as_ref()));
                    }
                }
            }
            if state.is_terminal() {
                break;
            }
            if !cancel_sent && deadline.is_some_and(|d| Instant::now() >= d) {
                warn!("Timeout reached; cancelling task {handle}");
                engine.cancel(handle)?;
                cancel_sent = true;
            }
        }
        progress.log_final();

        let final_frame = engine.latest_frame(handle)?;
        let summary = engine.retire(handle)?;
        log_run_summary(&summary);

        if let Some(path) = &self.trace {
            write_metrics_auto(path, &trace)?;
            info!("Wrote {} trace rows to {}", trace.len(), path.display());
        }
        if let Some(path) = &self.metrics {
            write_metrics_auto(path, &[RunMetric::from(&summary)])?;
        }

        if let Some(fault) = &summary.fault {
            bail!("Worker for task {handle} crashed: {fault}");
        }
        if summary.state == TaskState::Completed
            && !final_frame.is_some_and(|f| is_non_decreasing(&f.values))
        {
            bail!("{} completed but its final frame is not sorted", self.algorithm);
        }
        Ok(())
    }
}
