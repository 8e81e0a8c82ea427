use crate::Result;
use crate::diagnostics;
use crate::walk::GroupReport;

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Serialize every group as pretty JSON.
pub fn render_json_report(groups: &[GroupReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(groups)?)
}

pub fn write_json_report(path: &Path, groups: &[GroupReport]) -> Result<()> {
    let json = render_json_report(groups)?;
    fs::write(path, json)
        .with_context(|| diagnostics::error_message(format!("write json report {}", path.display())))
}
