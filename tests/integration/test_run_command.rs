//! Integration tests for the `run` command.

use fgoxide::io::DelimFile;
use sortviz_lib::algorithms::AlgorithmKind;
use sortviz_lib::metrics::{FrameMetric, RunMetric};
use sortviz_lib::task::TaskState;
use tempfile::TempDir;

use crate::helpers::{path_arg, run_sortviz};

#[test]
fn test_run_explicit_values_writes_summary() {
    let temp_dir = TempDir::new().unwrap();
    let metrics = temp_dir.path().join("run.tsv");

    let ok = run_sortviz(&[
        "run",
        "-a",
        "insertion",
        "--values",
        "3,1,4,1,5",
        "--rate",
        "unlimited",
        "--metrics",
        path_arg(&metrics),
    ]);
    assert!(ok, "run command failed");

    let rows: Vec<RunMetric> = DelimFile::default().read_tsv(&metrics).unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.algorithm, AlgorithmKind::Insertion);
    assert_eq!(row.state, TaskState::Completed);
    assert_eq!(row.size, 5);
    assert_eq!((row.reads, row.writes, row.comparisons), (18, 6, 6));
    assert_eq!(row.steps, 6);
    assert!(row.fault.is_none());
}

#[test]
fn test_run_uses_default_rate_when_omitted() {
    let temp_dir = TempDir::new().unwrap();
    let metrics = temp_dir.path().join("run.tsv");

    let ok = run_sortviz(&[
        "run",
        "-a",
        "bubble",
        "--values",
        "2,1,3",
        "--timeout-secs",
        "10",
        "--metrics",
        path_arg(&metrics),
    ]);
    assert!(ok, "run without --rate failed");

    let rows: Vec<RunMetric> = DelimFile::default().read_tsv(&metrics).unwrap();
    assert_eq!(rows[0].state, TaskState::Completed);
    assert_eq!(rows[0].steps, 3);
}

#[test]
fn test_run_trace_ends_with_sorted_done_frame() {
    let temp_dir = TempDir::new().unwrap();
    let trace = temp_dir.path().join("trace.tsv");

    let ok = run_sortviz(&[
        "run",
        "-a",
        "comb",
        "-n",
        "40",
        "--seed",
        "7",
        "--rate",
        "240",
        "--poll-ms",
        "2",
        "--trace",
        path_arg(&trace),
    ]);
    assert!(ok, "run command failed");

    let frames: Vec<FrameMetric> = DelimFile::default().read_tsv(&trace).unwrap();
    assert!(!frames.is_empty());
    let last = frames.last().unwrap();
    assert!(last.done);
    assert!(last.sorted);
    assert!(frames.windows(2).all(|w| w[0].step <= w[1].step));
    assert!(frames.windows(2).all(|w| w[0].comparisons <= w[1].comparisons));
}

#[test]
fn test_run_timeout_reports_cancelled() {
    let temp_dir = TempDir::new().unwrap();
    let metrics = temp_dir.path().join("run.tsv");

    let ok = run_sortviz(&[
        "run",
        "-a",
        "bubble",
        "-n",
        "300",
        "-d",
        "shuffled",
        "--seed",
        "1",
        "--rate",
        "10",
        "--timeout-secs",
        "1",
        "--metrics",
        path_arg(&metrics),
    ]);
    assert!(ok, "a cancelled run is not a failure");

    let rows: Vec<RunMetric> = DelimFile::default().read_tsv(&metrics).unwrap();
    assert_eq!(rows[0].state, TaskState::Cancelled);
    assert!(rows[0].steps < 300);
}

#[test]
fn test_run_rejects_invalid_options() {
    let paced = ["run", "-a", "bubble", "--rate", "240"];
    assert!(!run_sortviz(&[&paced[..], &["-n", "5"]].concat()), "size below minimum");
    assert!(!run_sortviz(&[&paced[..], &["-n", "501"]].concat()), "size above maximum");
    assert!(!run_sortviz(&["run", "-a", "bubble", "--rate", "500"]), "rate above maximum");
    assert!(!run_sortviz(&["run", "-a", "bubble", "--rate", "0"]), "zero rate");
    assert!(!run_sortviz(&["run", "-a", "bogo"]), "unknown algorithm");
    assert!(!run_sortviz(&["run", "-a", "bubble", "--values", "1,NaN"]), "non-finite value");
}
