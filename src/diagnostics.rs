//! Error-message and warning helpers shared by the parsing and walking code.

use crate::Result;

use anyhow::anyhow;
use tracing_subscriber::{EnvFilter, fmt};

/// Prefix an error message the same way everywhere.
pub fn error_message(msg: impl Into<String>) -> String {
    format!("error: {}", msg.into())
}

/// Report a suspicious but non-fatal condition on stderr.
pub fn warn(msg: impl Into<String>) {
    tracing::warn!("{}", msg.into());
}

/// Map the `-v` count from the command line to a filter directive.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber. Stdout stays reserved for the report.
pub fn init_logging(verbose: u8) -> Result<()> {
    let level = level_for_verbosity(verbose);
    fmt()
        .with_env_filter(
            EnvFilter::try_new(level)
                .map_err(|e| anyhow!(error_message(format!("invalid log level {}: {}", level, e))))?,
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|_| anyhow!(error_message("logging already initialized")))
}
