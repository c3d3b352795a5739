//! Compare the cost of several algorithms on the same dataset.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use log::info;
use sortviz_lib::algorithms::AlgorithmKind;
use sortviz_lib::control::StepRate;
use sortviz_lib::engine::Engine;
use sortviz_lib::logging::{OperationTimer, log_comparison_table};
use sortviz_lib::metrics::RunMetric;
use sortviz_lib::metrics::writer::write_metrics;
use sortviz_lib::task::{RunSummary, TaskState};

use crate::commands::command::Command;
use crate::commands::common::DatasetOptions;

/// Run several algorithms unthrottled on one dataset and report their counters.
#[derive(Debug, Parser)]
#[command(
    name = "compare",
    about = "\x1b[38;5;166m[UTILITIES]\x1b[0m      \x1b[36mCompare operation counts across algorithms\x1b[0m",
    long_about = r#"
Run a set of sorting algorithms, one after another, on the same dataset.

Every run is unthrottled. For each algorithm the number of reads, writes and
comparisons is reported together with the estimated running time derived
from them. Use --output to write one row per algorithm to a TSV file.

Example usage:
  sortviz compare -n 200 --seed 7
  sortviz compare -a bubble,shell,comb -n 500 -o compare.tsv
"#
)]
pub struct Compare {
    /// Algorithms to compare (default: all)
    #[arg(short = 'a', long = "algorithms", value_enum, value_delimiter = ',', num_args = 1..)]
    pub algorithms: Vec<AlgorithmKind>,

    /// Dataset options
    #[command(flatten)]
    pub dataset: DatasetOptions,

    /// Optional output TSV with one row per algorithm
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl Compare {
    fn selected(&self) -> Vec<AlgorithmKind> {
        if self.algorithms.is_empty() {
            AlgorithmKind::all().to_vec()
        } else {
            self.algorithms.clone()
        }
    }
}

impl Command for Compare {
    fn execute(&self, _command_line: &str) -> Result<()> {
        let dataset = self.dataset.build()?;
        let algorithms = self.selected();
        info!("Comparing {} algorithms on {} values", algorithms.len(), dataset.len());

        let timer = OperationTimer::new("Comparing algorithms");
        let mut engine = Engine::new(self.dataset.engine_config(StepRate::Unlimited));
        let expected = dataset.sorted_values();
        let mut summaries: Vec<RunSummary> = Vec::with_capacity(algorithms.len());

        for algorithm in algorithms {
            let handle = engine.start_run(algorithm, &dataset, StepRate::Unlimited)?;
            let state = engine.wait(handle, None)?;
            let frame = engine.latest_frame(handle)?;
            let summary = engine.retire(handle)?;
            if state != TaskState::Completed {
                let reason = summary.fault.as_deref().unwrap_or("cancelled");
                bail!("{algorithm} did not complete: {reason}");
            }
            if frame.is_none_or(|f| f.values != expected) {
                bail!("{algorithm} produced unsorted output");
            }
            summaries.push(summary);
        }
        timer.log_completion(summaries.len() as u64);
        log_comparison_table(&summaries);

        if let Some(path) = &self.output {
            let metrics: Vec<RunMetric> = summaries.iter().map(RunMetric::from).collect();
            write_metrics(path, &metrics, "comparison")?;
            info!("Wrote {} rows to {}", metrics.len(), path.display());
        }
        Ok(())
    }
}
