//! Path management for finreport
//!
//! ## Path Resolution Order
//!
//! 1. `FINREPORT_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/finreport-cli` on Linux,
//!    `%APPDATA%\finreport-cli` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::FinReportError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINREPORT_CLI_DATA_DIR";

/// Manages all paths used by finreport
#[derive(Debug, Clone)]
pub struct FinReportPaths {
    /// Base directory for all finreport files
    base_dir: PathBuf,
}

impl FinReportPaths {
    /// Create a new FinReportPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinReportError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FinReportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the session file written by the login step
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Default directory for exported reports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinReportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinReportError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinReportError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| FinReportError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("finreport-cli"))
}
