//! Report export
//!
//! Writes the displayed report to a file named after its period:
//! `Financial_Report_2024-03.pdf` for a month, `Yearly_Report_2024.pdf` for a
//! year. Formats:
//! - PDF: single-page printable report
//! - JSON / YAML: machine- and human-readable snapshot
//! - CSV: one row per amount, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod pdf;
pub mod yaml;

pub use json::{SummaryExport, EXPORT_SCHEMA_VERSION};
pub use pdf::{render_pdf, PdfLayout, PAGE_WIDTH_MM};

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::{FinReportError, FinReportResult};
use crate::models::ReportPeriod;
use crate::reports::{ExportTarget, RenderOptions, ReportView};
use crate::storage::write_bytes_atomic;

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Printable single-page PDF
    #[default]
    Pdf,
    /// JSON snapshot of the report
    Json,
    /// CSV, one row per amount
    Csv,
    /// YAML snapshot, human-readable
    #[value(alias = "yml")]
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// File name for an exported report
pub fn export_filename(period: &ReportPeriod, format: ExportFormat) -> String {
    let stem = match period {
        ReportPeriod::Month { .. } => "Financial_Report",
        ReportPeriod::Year { .. } => "Yearly_Report",
    };
    format!("{}_{}.{}", stem, period.key(), format.extension())
}

/// A written export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub filename: String,
    pub path: PathBuf,
    pub format: ExportFormat,
    /// Page width and height in millimetres, PDF only
    pub page_size_mm: Option<(f32, f32)>,
    pub bytes_written: usize,
}

/// Writes exports into one directory
#[derive(Debug, Clone)]
pub struct ReportExporter {
    dir: PathBuf,
    options: RenderOptions,
}

impl ReportExporter {
    pub fn new(dir: impl Into<PathBuf>, options: RenderOptions) -> Self {
        Self {
            dir: dir.into(),
            options,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export the displayed report, dated today
    pub fn export(
        &self,
        target: ExportTarget<'_>,
        format: ExportFormat,
    ) -> FinReportResult<ExportArtifact> {
        self.export_dated(target, format, chrono::Local::now().date_naive())
    }

    /// Export the displayed report with an explicit "Generated on" date
    pub fn export_dated(
        &self,
        target: ExportTarget<'_>,
        format: ExportFormat,
        generated_on: NaiveDate,
    ) -> FinReportResult<ExportArtifact> {
        let view = ReportView::build(
            target.summary(),
            target.period().granularity(),
            &self.options,
            generated_on,
        );

        let (bytes, page_size_mm) = match format {
            ExportFormat::Pdf => {
                let (bytes, size) = render_pdf(&view)?;
                (bytes, Some(size))
            }
            ExportFormat::Json => (json::render_json(target, &view)?, None),
            ExportFormat::Csv => (csv::render_csv(target, &view)?, None),
            ExportFormat::Yaml => (yaml::render_yaml(target, &view)?, None),
        };

        let filename = export_filename(target.period(), format);
        let path = self.dir.join(&filename);
        write_bytes_atomic(&path, &bytes).map_err(|e| {
            FinReportError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), %format, bytes = bytes.len(), "report exported");

        Ok(ExportArtifact {
            filename,
            path,
            format,
            page_size_mm,
            bytes_written: bytes.len(),
        })
    }
}
