//! Utilities for writing metrics files.
//!
//! This module provides convenience functions for writing metrics to TSV files
//! with consistent error handling.

use anyhow::{Context, Result};
use fgoxide::io::DelimFile;
use serde::Serialize;
use std::path::Path;

use super::Metric;

/// Write metrics to a TSV file with consistent error handling.
///
/// # Arguments
/// * `path` - Path to the output TSV file
/// * `metrics` - The metrics to write (must implement Serialize)
/// * `description` - Human-readable description of the metrics for error messages
///
/// # Errors
/// Returns an error if the file cannot be created or written to
///
/// # Example
/// ```no_run
/// use sortviz_lib::metrics::writer::write_metrics;
/// use sortviz_lib::metrics::RunMetric;
/// use std::path::Path;
///
/// let metrics = vec![RunMetric::default()];
/// write_metrics(Path::new("runs.tsv"), &metrics, "run").unwrap();
/// ```
pub fn write_metrics<P: AsRef<Path>, T: Serialize>(
    path: P,
    metrics: &[T],
    description: &str,
) -> Result<()> {
    let path_ref = path.as_ref();
    DelimFile::default()
        .write_tsv(&path_ref, metrics)
        .with_context(|| format!("Failed to write {} metrics: {}", description, path_ref.display()))
}

/// Write metrics implementing the Metric trait, using the metric's own name in errors.
///
/// # Errors
/// Returns an error if the file cannot be created or written to
pub fn write_metrics_auto<P: AsRef<Path>, T: Metric>(path: P, metrics: &[T]) -> Result<()> {
    write_metrics(path, metrics, T::metric_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::AlgorithmKind;
    use crate::metrics::{FrameMetric, RunMetric};
    use crate::task::TaskState;
    use std::fs;
    use tempfile::NamedTempFile;

    fn run_metric(algorithm: AlgorithmKind, comparisons: u64) -> RunMetric {
        RunMetric {
            task: 1,
            algorithm,
            size: 5,
            state: TaskState::Completed,
            steps: comparisons,
            reads: comparisons * 2,
            writes: 0,
            comparisons,
            estimated_ms: "0.000100".to_string(),
            elapsed_secs: "0.001000".to_string(),
            fault: None,
        }
    }

    #[test]
    fn test_write_metrics_header_and_rows() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        let metrics =
            vec![run_metric(AlgorithmKind::Bubble, 4), run_metric(AlgorithmKind::Insertion, 6)];

        write_metrics(temp_file.path(), &metrics, "run")?;

        let content = fs::read_to_string(temp_file.path())?;
        let header = content.lines().next().unwrap_or_default();
        assert!(header.starts_with("task\talgorithm\tsize\tstate"));
        assert!(content.contains("bubble"));
        assert!(content.contains("insertion"));
        assert!(content.contains("completed"));
        Ok(())
    }

    #[test]
    fn test_write_metrics_invalid_path() {
        let metrics = vec![run_metric(AlgorithmKind::Gnome, 1)];
        let result = write_metrics("/invalid/path/metrics.txt", &metrics, "test");
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to write test metrics"));
    }

    #[test]
    fn test_run_metrics_read_back() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        let original =
            vec![run_metric(AlgorithmKind::Cycle, 10), run_metric(AlgorithmKind::Comb, 9)];
        write_metrics_auto(temp_file.path(), &original)?;

        let read: Vec<RunMetric> = DelimFile::default().read_tsv(&temp_file.path())?;
        assert_eq!(read, original);
        Ok(())
    }

    #[test]
    fn test_frame_metrics_auto() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        let metrics = vec![FrameMetric { step: 3, primary: "0".into(), ..Default::default() }];
        write_metrics_auto(temp_file.path(), &metrics)?;

        let read: Vec<FrameMetric> = DelimFile::default().read_tsv(&temp_file.path())?;
        assert_eq!(read, metrics);
        Ok(())
    }
}
