//! YAML export of a displayed report
//!
//! Same document as the JSON export, in a human-readable format.

use super::json::SummaryExport;
use crate::error::{FinReportError, FinReportResult};
use crate::reports::{ExportTarget, ReportView};

/// Render a report as YAML
pub fn render_yaml(target: ExportTarget<'_>, view: &ReportView) -> FinReportResult<Vec<u8>> {
    let export = SummaryExport::new(target, view);
    let yaml = serde_yaml::to_string(&export)
        .map_err(|e| FinReportError::Export(format!("YAML serialization failed: {}", e)))?;
    Ok(yaml.into_bytes())
}
