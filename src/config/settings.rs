//! User settings for finreport
//!
//! Manages the backend location, display formatting and export preferences.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::paths::FinReportPaths;
use crate::error::FinReportError;
use crate::export::pdf::is_winansi;
use crate::models::{AmountFormat, UserId};
use crate::storage::file_io::{read_json, write_json_atomic};

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "FINREPORT_API_URL";

/// User settings for finreport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the report backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Prefix printed before every amount
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,

    /// How amounts are stringified
    #[serde(default)]
    pub amount_format: AmountFormat,

    /// Format of the "Generated on" date (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Where exports are written; `<base>/exports` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// User to report on when nobody is signed in. Unset means signed-out
    /// report requests are rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user_id: Option<UserId>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_currency_prefix() -> String {
    "Rs. ".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            currency_prefix: default_currency_prefix(),
            amount_format: AmountFormat::default(),
            date_format: default_date_format(),
            export_dir: None,
            default_user_id: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// `FINREPORT_API_URL` overrides the stored base URL.
    pub fn load_or_create(paths: &FinReportPaths) -> Result<Self, FinReportError> {
        let mut settings: Settings = read_json(paths.settings_file())
            .map_err(|e| FinReportError::Config(format!("Failed to load settings: {}", e)))?;

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                settings.api_base_url = url;
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinReportPaths) -> Result<(), FinReportError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> Result<(), FinReportError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(FinReportError::Config(format!(
                "api_base_url must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(FinReportError::Config(
                "request_timeout_secs must be at least 1".into(),
            ));
        }
        if !is_winansi(&self.currency_prefix) {
            return Err(FinReportError::Config(format!(
                "currency_prefix '{}' cannot be printed with the built-in PDF fonts",
                self.currency_prefix
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolved export directory
    pub fn export_dir(&self, paths: &FinReportPaths) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| paths.export_dir())
    }
}
