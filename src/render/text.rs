use crate::dataset::DatasetReport;

use std::io::{self, Write};

/// Width of the line written after each top-level directory.
pub const SEPARATOR_WIDTH: usize = 80;

/// Dataset path followed by one `name=value` line per statistic.
///
/// Values use `{:?}` so whole numbers keep their `.0` (e.g. `500.0`).
pub fn write_dataset<W: Write>(out: &mut W, report: &DatasetReport) -> io::Result<()> {
    writeln!(out, "{}", report.path)?;
    writeln!(out, "min(total_times)={:?}", report.summary.min)?;
    writeln!(out, "max(total_times)={:?}", report.summary.max)?;
    writeln!(out, "statistics.mean(total_times)={:?}", report.summary.mean)?;
    Ok(())
}

pub fn write_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}
