//! Core data models for finreport
//!
//! This module contains the report-side data structures: the period being
//! reported on, the backend's aggregate, amounts, and the user identity.

pub mod amount;
pub mod period;
pub mod summary;
pub mod user;

pub use amount::{Amount, AmountFormat};
pub use period::{selectable_years, Granularity, PeriodSelector, ReportPeriod};
pub use summary::FinancialSummary;
pub use user::{User, UserId};
