//! Parsing of benchmark run logs.

pub mod line;
pub mod run;

pub use line::parse_timestamp;
pub use run::read_run_times;
