//! Walk the fixed top-level directories and summarize each dataset in them.

use crate::Result;
use crate::dataset::{self, DatasetReport};
use crate::diagnostics;
use crate::render;

use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level directories, in output order.
pub const TOP_LEVEL_DIRS: [&str; 5] = ["initial", "spec_checks", "lhs", "flat_is_justice", "current"];

/// Entry skipped when listing a top-level directory.
pub const EXCLUDED_ENTRY: &str = "get_times.py";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct GroupReport {
    pub directory: String,
    pub datasets: Vec<DatasetReport>,
}

/// Entries of `dir` sorted by name, minus [`EXCLUDED_ENTRY`].
///
/// Non-directories are kept; they fail later when read as datasets.
pub fn dataset_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read = fs::read_dir(dir)
        .with_context(|| diagnostics::error_message(format!("list directory {}", dir.display())))?;

    let mut names = Vec::new();
    for entry in read {
        let entry = entry.with_context(|| {
            diagnostics::error_message(format!("list directory {}", dir.display()))
        })?;
        let name = entry.file_name();
        if name == EXCLUDED_ENTRY {
            continue;
        }
        names.push(name);
    }
    names.sort();

    Ok(names.into_iter().map(|n| dir.join(n)).collect())
}

/// Summarize every dataset of one top-level directory, then write the separator.
pub fn walk_group<W: Write>(dir: &Path, out: &mut W) -> Result<GroupReport> {
    let mut datasets = Vec::new();
    for ds in dataset_entries(dir)? {
        writeln!(out)?;
        datasets.push(dataset::print_stats(&ds, out)?);
    }
    render::text::write_separator(out)?;

    tracing::info!(directory = %dir.display(), datasets = datasets.len(), "finished group");
    Ok(GroupReport {
        directory: dir.display().to_string(),
        datasets,
    })
}

/// Directory of one group. Without a root the bare name is used, so dataset
/// paths print as `lhs/adult`.
pub fn group_dir(root: Option<&Path>, name: &str) -> PathBuf {
    match root {
        Some(root) => root.join(name),
        None => PathBuf::from(name),
    }
}

/// Walk all of [`TOP_LEVEL_DIRS`], under `root` or the working directory.
pub fn walk_root<W: Write>(root: Option<&Path>, out: &mut W) -> Result<Vec<GroupReport>> {
    let mut groups = Vec::with_capacity(TOP_LEVEL_DIRS.len());
    for name in TOP_LEVEL_DIRS {
        groups.push(walk_group(&group_dir(root, name), out)?);
    }
    Ok(groups)
}
