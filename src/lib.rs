//! finreport - monthly and yearly personal-finance reports in the terminal
//!
//! This library fetches aggregated income, expense and savings totals from a
//! report backend, renders them, and exports them as PDF, JSON, CSV or YAML.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Periods, amounts, summaries and user identity
//! - `session`: Signed-in user resolution
//! - `api`: Report backend access
//! - `reports`: Report workflow state and rendering
//! - `export`: Export artifacts
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finreport::api::HttpReportClient;
//! use finreport::models::{Granularity, UserId};
//! use finreport::reports::ReportWorkflow;
//!
//! let client = HttpReportClient::new("http://localhost:5000", timeout)?;
//! let mut workflow = ReportWorkflow::new(UserId::new(1), Granularity::Monthly);
//! workflow.select("2024-03")?;
//! let summary = workflow.view_report(&client)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod session;
pub mod storage;

pub use error::{FinReportError, FinReportResult};
