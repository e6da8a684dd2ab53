//! HTTP client for the report endpoints
//!
//! - `GET /api/reports/{user_id}/{YYYY-MM}`
//! - `GET /api/yearly-report/{user_id}/{YYYY}`
//!
//! Both are read-only. Any non-2xx status is a fetch failure; the body is not
//! inspected. There is no retry and no caching.

use std::time::Duration;

use tracing::{debug, warn};

use super::ReportBackend;
use crate::config::Settings;
use crate::error::{FinReportError, FinReportResult};
use crate::models::{FinancialSummary, ReportPeriod, UserId};

/// Path of the report endpoint for a user and period
pub fn report_path(user: UserId, period: &ReportPeriod) -> String {
    match period {
        ReportPeriod::Month { .. } => format!("/api/reports/{}/{}", user, period.key()),
        ReportPeriod::Year { .. } => format!("/api/yearly-report/{}/{}", user, period.key()),
    }
}

/// Blocking HTTP client for the report backend
#[derive(Debug, Clone)]
pub struct HttpReportClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl HttpReportClient {
    /// Create a client for `base_url` (e.g. "http://localhost:5000")
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> FinReportResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("finreport/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FinReportError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_settings(settings: &Settings) -> FinReportResult<Self> {
        Self::new(settings.api_base_url.clone(), settings.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the report endpoint
    pub fn report_url(&self, user: UserId, period: &ReportPeriod) -> String {
        format!("{}{}", self.base_url, report_path(user, period))
    }
}

impl ReportBackend for HttpReportClient {
    fn fetch_summary(
        &self,
        user: UserId,
        period: &ReportPeriod,
    ) -> FinReportResult<FinancialSummary> {
        let url = self.report_url(user, period);
        let failure = period.granularity().fetch_failure_message();
        debug!(%url, "requesting report");

        let response = self.http.get(&url).send().map_err(|e| {
            warn!(%url, error = %e, "report request failed");
            FinReportError::fetch(failure, e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "report backend returned an error status");
            return Err(FinReportError::fetch(failure, format!("HTTP {}", status)));
        }

        response.json::<FinancialSummary>().map_err(|e| {
            warn!(%url, error = %e, "report body did not match the summary shape");
            FinReportError::fetch(failure, format!("Invalid report body: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_path() {
        let period = ReportPeriod::month(2024, 3).unwrap();
        assert_eq!(report_path(UserId::new(7), &period), "/api/reports/7/2024-03");
    }

    #[test]
    fn test_yearly_path() {
        let period = ReportPeriod::year(2023);
        assert_eq!(
            report_path(UserId::new(7), &period),
            "/api/yearly-report/7/2023"
        );
    }

    #[test]
    fn test_report_url_trims_trailing_slash() {
        let client =
            HttpReportClient::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.report_url(UserId::new(1), &ReportPeriod::year(2025)),
            "http://localhost:5000/api/yearly-report/1/2025"
        );
    }

    #[test]
    fn test_unreachable_backend_is_fetch_error() {
        // port 9 (discard) is not listening on test machines
        let client = HttpReportClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client
            .fetch_summary(UserId::new(1), &ReportPeriod::year(2024))
            .unwrap_err();
        assert!(err.is_fetch());
        assert_eq!(
            err.to_string(),
            "Unable to fetch yearly report. Ensure the report backend is running."
        );
    }
}
