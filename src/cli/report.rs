//! CLI commands for reports
//!
//! `report monthly` and `report yearly` fetch, print and optionally export a
//! report; `report years` lists the years the yearly report offers.

use std::path::PathBuf;

use chrono::Datelike;
use clap::{Args, Subcommand};

use super::AppContext;
use crate::api::{HttpReportClient, ReportBackend};
use crate::error::{FinReportError, FinReportResult};
use crate::export::{ExportArtifact, ExportFormat, ReportExporter};
use crate::models::{selectable_years, Granularity, UserId};
use crate::reports::{RenderOptions, ReportView, ReportWorkflow};
use crate::session::{resolve_user, SessionStore};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the report for one month
    #[command(alias = "month")]
    Monthly {
        /// Month to report on (e.g., "2025-01")
        #[arg(short, long)]
        month: Option<String>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Show the report for one year
    #[command(alias = "year")]
    Yearly {
        /// Year to report on (current year +/- 5)
        #[arg(short, long)]
        year: Option<String>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// List the years available to the yearly report
    Years,
}

/// Export options shared by both report commands
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Export the report after showing it (default format: pdf)
    #[arg(
        short,
        long,
        value_enum,
        num_args = 0..=1,
        default_missing_value = "pdf"
    )]
    pub export: Option<ExportFormat>,

    /// Directory to write the export into
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle report commands
pub fn handle_report_command(
    ctx: &AppContext,
    explicit_user: Option<UserId>,
    cmd: ReportCommands,
) -> FinReportResult<()> {
    match cmd {
        ReportCommands::Monthly { month, export } => {
            handle_view_report(ctx, explicit_user, Granularity::Monthly, month, export)
        }
        ReportCommands::Yearly { year, export } => {
            handle_view_report(ctx, explicit_user, Granularity::Yearly, year, export)
        }
        ReportCommands::Years => {
            handle_years();
            Ok(())
        }
    }
}

fn handle_view_report(
    ctx: &AppContext,
    explicit_user: Option<UserId>,
    granularity: Granularity,
    selection: Option<String>,
    export: ExportArgs,
) -> FinReportResult<()> {
    let user = resolve_user(explicit_user, &SessionStore::new(&ctx.paths), &ctx.settings)?;
    let client = HttpReportClient::from_settings(&ctx.settings)?;

    let (view, artifact) = run_report(ctx, &client, user, granularity, selection, &export)?;

    println!("{}", view.format_terminal());
    if let Some(artifact) = artifact {
        println!("Report exported to: {}", artifact.path.display());
    }

    Ok(())
}

/// Select, fetch, render and optionally export one report
pub fn run_report<B: ReportBackend + ?Sized>(
    ctx: &AppContext,
    backend: &B,
    user: UserId,
    granularity: Granularity,
    selection: Option<String>,
    export: &ExportArgs,
) -> FinReportResult<(ReportView, Option<ExportArtifact>)> {
    let mut workflow = ReportWorkflow::new(user, granularity);
    if let Some(input) = selection {
        workflow.select(&input)?;
    }

    let options = RenderOptions::from_settings(&ctx.settings);
    let summary = workflow.view_report(backend)?;
    let view = ReportView::render(summary, granularity, &options);

    let artifact = match export.export {
        Some(format) => {
            let dir = export
                .output
                .clone()
                .unwrap_or_else(|| ctx.settings.export_dir(&ctx.paths));
            let exporter = ReportExporter::new(dir, options);
            let artifact = workflow
                .export_with(|target| exporter.export(target, format))
                .ok_or_else(|| FinReportError::Export("No report is displayed".into()))??;
            Some(artifact)
        }
        None => None,
    };

    Ok((view, artifact))
}

fn handle_years() {
    let current = chrono::Local::now().year();
    println!("Selectable years:");
    for year in selectable_years(current) {
        if year == current {
            println!("  {} (current)", year);
        } else {
            println!("  {}", year);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FinReportPaths, Settings};
    use crate::models::{FinancialSummary, ReportPeriod};
    use std::cell::Cell;
    use tempfile::TempDir;

    struct CountingBackend {
        calls: Cell<usize>,
    }

    impl ReportBackend for CountingBackend {
        fn fetch_summary(
            &self,
            _user: UserId,
            period: &ReportPeriod,
        ) -> FinReportResult<FinancialSummary> {
            self.calls.set(self.calls.get() + 1);
            Ok(FinancialSummary::new(period.key(), 5000.0, 3000.0, 1000.0, 1000.0))
        }
    }

    fn context(temp_dir: &TempDir) -> AppContext {
        AppContext {
            paths: FinReportPaths::with_base_dir(temp_dir.path().to_path_buf()),
            settings: Settings::default(),
        }
    }

    #[test]
    fn test_missing_month_is_validation_without_request() {
        let temp_dir = TempDir::new().unwrap();
        let backend = CountingBackend { calls: Cell::new(0) };

        let err = run_report(
            &context(&temp_dir),
            &backend,
            UserId::new(1),
            Granularity::Monthly,
            None,
            &ExportArgs::default(),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Please select a month!");
        assert_eq!(backend.calls.get(), 0);
    }

    #[test]
    fn test_yearly_report_with_pdf_export() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        let backend = CountingBackend { calls: Cell::new(0) };
        let current = chrono::Local::now().year();
        let export = ExportArgs {
            export: Some(ExportFormat::Pdf),
            output: None,
        };

        let (view, artifact) = run_report(
            &ctx,
            &backend,
            UserId::new(1),
            Granularity::Yearly,
            Some(current.to_string()),
            &export,
        )
        .unwrap();

        let artifact = artifact.unwrap();
        assert_eq!(view.title, format!("Report for {}", current));
        assert_eq!(artifact.filename, format!("Yearly_Report_{}.pdf", current));
        assert!(artifact.path.starts_with(ctx.paths.export_dir()));
        assert!(artifact.path.exists());
    }

    #[test]
    fn test_export_output_dir_override() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("custom");
        let backend = CountingBackend { calls: Cell::new(0) };
        let export = ExportArgs {
            export: Some(ExportFormat::Json),
            output: Some(out.clone()),
        };

        let (_, artifact) = run_report(
            &context(&temp_dir),
            &backend,
            UserId::new(1),
            Granularity::Monthly,
            Some("2024-03".into()),
            &export,
        )
        .unwrap();

        assert_eq!(
            artifact.unwrap().path,
            out.join("Financial_Report_2024-03.json")
        );
    }
}
