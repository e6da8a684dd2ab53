//! Configuration module for finreport
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinReportPaths;
pub use settings::Settings;
