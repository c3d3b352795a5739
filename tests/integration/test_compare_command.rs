//! Integration tests for the `compare` command.

use fgoxide::io::DelimFile;
use sortviz_lib::algorithms::AlgorithmKind;
use sortviz_lib::metrics::RunMetric;
use sortviz_lib::task::TaskState;
use tempfile::TempDir;

use crate::helpers::{path_arg, run_sortviz};

#[test]
fn test_compare_all_algorithms() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("compare.tsv");

    let ok = run_sortviz(&["compare", "-n", "100", "--seed", "42", "-o", path_arg(&output)]);
    assert!(ok, "compare command failed");

    let rows: Vec<RunMetric> = DelimFile::default().read_tsv(&output).unwrap();
    let algorithms: Vec<AlgorithmKind> = rows.iter().map(|r| r.algorithm).collect();
    assert_eq!(algorithms, AlgorithmKind::all());
    for row in &rows {
        assert_eq!(row.state, TaskState::Completed);
        assert_eq!(row.size, 100);
        assert!(row.comparisons > 0, "{} made no comparisons", row.algorithm);
    }
}

#[test]
fn test_compare_is_reproducible_with_seed() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.tsv");
    let second = temp_dir.path().join("second.tsv");
    let args = ["compare", "-a", "selection,cycle", "-n", "60", "-d", "random", "--seed", "8"];

    assert!(run_sortviz(&[&args[..], &["-o", path_arg(&first)]].concat()));
    assert!(run_sortviz(&[&args[..], &["-o", path_arg(&second)]].concat()));

    let first: Vec<RunMetric> = DelimFile::default().read_tsv(&first).unwrap();
    let second: Vec<RunMetric> = DelimFile::default().read_tsv(&second).unwrap();
    assert_eq!(first.len(), 2);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!((a.reads, a.writes, a.comparisons), (b.reads, b.writes, b.comparisons));
    }
    // Selection sort always makes n(n-1)/2 comparisons.
    assert_eq!(first[0].comparisons, 60 * 59 / 2);
}
