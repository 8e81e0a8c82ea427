//! Per-dataset aggregation: five run logs, one summary.

use crate::Result;
use crate::diagnostics;
use crate::log::read_run_times;
use crate::render;
use crate::stats::{self, Summary};

use anyhow::Context;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Number of repeated runs recorded for every dataset.
pub const RUNS_PER_DATASET: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct DatasetReport {
    pub path: String,
    /// Similarity-to-done durations in run order (log0 first).
    pub durations_ms: Vec<f64>,
    pub summary: Summary,
}

/// `dir/log{run}.txt`
pub fn run_log_path(dir: &Path, run: usize) -> PathBuf {
    dir.join(format!("log{}.txt", run))
}

/// Read every run log of `dir` and summarize. Nothing is printed here, so a
/// missing or broken log fails before any output for the dataset.
pub fn collect(dir: &Path) -> Result<DatasetReport> {
    let mut durations_ms = Vec::with_capacity(RUNS_PER_DATASET);
    for run in 0..RUNS_PER_DATASET {
        let path = run_log_path(dir, run);
        let times = read_run_times(&path).with_context(|| {
            diagnostics::error_message(format!("dataset {} run {}", dir.display(), run))
        })?;

        let ms = times.similarity_to_done_ms();
        if ms < 0.0 {
            diagnostics::warn(format!(
                "{}: Done! precedes similarity marker ({} ms)",
                path.display(),
                ms
            ));
        }
        durations_ms.push(ms);
    }

    let summary = stats::summarize(&durations_ms)?;
    tracing::info!(
        dataset = %dir.display(),
        min = summary.min,
        max = summary.max,
        mean = summary.mean,
        "summarized dataset"
    );

    Ok(DatasetReport {
        path: dir.display().to_string(),
        durations_ms,
        summary,
    })
}

/// Collect the dataset and write its text block to `out`.
pub fn print_stats<W: Write>(dir: &Path, out: &mut W) -> Result<DatasetReport> {
    let report = collect(dir)?;
    render::text::write_dataset(out, &report)?;
    Ok(report)
}
