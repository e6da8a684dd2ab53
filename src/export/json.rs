//! JSON export of a displayed report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FinReportResult;
use crate::models::{FinancialSummary, Granularity, UserId};
use crate::reports::{ExportTarget, ReportView};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A displayed line as it appeared on screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayedLine {
    pub label: String,
    pub value: String,
}

/// Machine-readable snapshot of one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub user_id: UserId,
    pub granularity: Granularity,
    /// Canonical period key ("2024-03" or "2024")
    pub period: String,

    /// Raw totals as returned by the backend
    pub summary: FinancialSummary,

    /// Rendered lines, formatted with the active settings
    pub displayed: Vec<DisplayedLine>,
    pub generated_on: String,
}

impl SummaryExport {
    pub fn new(target: ExportTarget<'_>, view: &ReportView) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user_id: target.user(),
            granularity: target.period().granularity(),
            period: target.period().key(),
            summary: target.summary().clone(),
            displayed: view
                .lines
                .iter()
                .map(|line| DisplayedLine {
                    label: line.label.to_string(),
                    value: line.value.clone(),
                })
                .collect(),
            generated_on: view.footer.trim_start_matches("Generated on ").to_string(),
        }
    }
}

/// Render a report as pretty-printed JSON
pub fn render_json(target: ExportTarget<'_>, view: &ReportView) -> FinReportResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&SummaryExport::new(target, view))?)
}
