//! Timestamp prefix of a benchmark log line.
//!
//! Example line:
//! 2024-01-02 14:53:14,039 Finished similarity calculation

use crate::Result;
use crate::diagnostics;

use anyhow::{Context, anyhow};
use chrono::NaiveDateTime;

/// Length of the `YYYY-MM-DD HH:MM:SS,mmm` prefix.
pub const TIMESTAMP_LEN: usize = "2024-01-02 14:53:14,039".len();

/// chrono format for the prefix; milliseconds follow a comma.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Parse the fixed-width timestamp at the start of `line`.
///
/// The value is taken literally, with no timezone attached.
pub fn parse_timestamp(line: &str) -> Result<NaiveDateTime> {
    let prefix = line.get(..TIMESTAMP_LEN).ok_or_else(|| {
        anyhow!(diagnostics::error_message(format!(
            "line too short for a timestamp prefix: {:?}",
            line
        )))
    })?;

    NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT).with_context(|| {
        diagnostics::error_message(format!("bad timestamp prefix {:?}", prefix))
    })
}
