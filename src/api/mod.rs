//! Report backend access
//!
//! [`ReportBackend`] is the seam between the report workflow and the network;
//! [`HttpReportClient`] is the production implementation.

pub mod client;

pub use client::{report_path, HttpReportClient};

use crate::error::FinReportResult;
use crate::models::{FinancialSummary, ReportPeriod, UserId};

/// Something that can produce the aggregate for one user and one period
pub trait ReportBackend {
    /// Fetch the summary. Any failure is a `FinReportError::Fetch`.
    fn fetch_summary(&self, user: UserId, period: &ReportPeriod)
        -> FinReportResult<FinancialSummary>;
}

impl<T: ReportBackend + ?Sized> ReportBackend for &T {
    fn fetch_summary(
        &self,
        user: UserId,
        period: &ReportPeriod,
    ) -> FinReportResult<FinancialSummary> {
        (**self).fetch_summary(user, period)
    }
}
