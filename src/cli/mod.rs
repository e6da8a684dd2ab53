//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report workflow.

pub mod report;
pub mod session;

pub use report::{handle_report_command, ExportArgs, ReportCommands};
pub use session::{handle_session_command, SessionCommands};

use crate::config::{FinReportPaths, Settings};
use crate::error::FinReportResult;

/// Resolved paths and settings shared by every command
#[derive(Debug, Clone)]
pub struct AppContext {
    pub paths: FinReportPaths,
    pub settings: Settings,
}

impl AppContext {
    /// Resolve paths from the environment and load settings
    pub fn load() -> FinReportResult<Self> {
        let paths = FinReportPaths::new()?;
        Self::with_paths(paths)
    }

    pub fn with_paths(paths: FinReportPaths) -> FinReportResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        Ok(Self { paths, settings })
    }
}
