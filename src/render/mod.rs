//! Output formats for dataset reports.

pub mod json;
pub mod text;
