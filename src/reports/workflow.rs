//! Report workflow
//!
//! Drives one report screen for one user:
//!
//! ```text
//! Idle -> Selecting -> Fetching -> Displaying | FetchFailed
//!                                  Displaying -> Exporting -> Displaying
//! ```
//!
//! Every "view report" action issues a new request; nothing is cached. Each
//! request carries a sequence number and only the response to the latest one
//! is applied, so a slow earlier response can't overwrite a newer summary.

use tracing::{debug, info, warn};

use crate::api::ReportBackend;
use crate::error::{FinReportError, FinReportResult};
use crate::models::{FinancialSummary, Granularity, PeriodSelector, ReportPeriod, UserId};

/// Where the workflow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportState {
    Idle,
    Selecting,
    Fetching,
    Displaying,
    FetchFailed,
    Exporting,
}

/// An issued report request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    user: UserId,
    period: ReportPeriod,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn period(&self) -> &ReportPeriod {
        &self.period
    }
}

/// What happened to a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The summary replaced whatever was displayed
    Applied,
    /// A newer request was issued since; the result was dropped
    Stale,
}

/// The summary on screen and the period it was fetched for
#[derive(Debug, Clone, PartialEq)]
struct Displayed {
    period: ReportPeriod,
    summary: FinancialSummary,
}

/// Handle to the displayed report, only obtainable while one exists
#[derive(Debug, Clone, Copy)]
pub struct ExportTarget<'a> {
    user: UserId,
    period: ReportPeriod,
    summary: &'a FinancialSummary,
}

impl<'a> ExportTarget<'a> {
    pub(crate) fn new(user: UserId, period: ReportPeriod, summary: &'a FinancialSummary) -> Self {
        Self {
            user,
            period,
            summary,
        }
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn period(&self) -> &ReportPeriod {
        &self.period
    }

    pub fn summary(&self) -> &'a FinancialSummary {
        self.summary
    }
}

/// State for one report screen
#[derive(Debug, Clone)]
pub struct ReportWorkflow {
    user: UserId,
    selector: PeriodSelector,
    state: ReportState,
    displayed: Option<Displayed>,
    loading: bool,
    issued: u64,
    last_error: Option<String>,
}

impl ReportWorkflow {
    pub fn new(user: UserId, granularity: Granularity) -> Self {
        Self::with_selector(user, PeriodSelector::new(granularity))
    }

    pub fn with_selector(user: UserId, selector: PeriodSelector) -> Self {
        Self {
            user,
            selector,
            state: ReportState::Idle,
            displayed: None,
            loading: false,
            issued: 0,
            last_error: None,
        }
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn granularity(&self) -> Granularity {
        self.selector.granularity()
    }

    pub fn selector(&self) -> &PeriodSelector {
        &self.selector
    }

    pub fn state(&self) -> ReportState {
        self.state
    }

    /// True while the latest issued request hasn't completed
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The displayed summary, if any
    pub fn summary(&self) -> Option<&FinancialSummary> {
        self.displayed.as_ref().map(|d| &d.summary)
    }

    /// The period the displayed summary was fetched for
    pub fn displayed_period(&self) -> Option<&ReportPeriod> {
        self.displayed.as_ref().map(|d| &d.period)
    }

    /// Message from the last failed fetch, cleared on the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Change the selected period
    pub fn select(&mut self, input: &str) -> FinReportResult<ReportPeriod> {
        let period = *self.selector.select(input)?;
        self.state = ReportState::Selecting;
        debug!(period = %period, "period selected");
        Ok(period)
    }

    /// Issue a request for the selected period
    ///
    /// Fails with the selection prompt, without issuing anything, when no
    /// period is selected.
    pub fn begin_fetch(&mut self) -> FinReportResult<FetchTicket> {
        let period = self.selector.resolve()?;

        self.issued += 1;
        self.loading = true;
        self.state = ReportState::Fetching;

        info!(seq = self.issued, user_id = %self.user, period = %period, "fetching report");
        Ok(FetchTicket {
            seq: self.issued,
            user: self.user,
            period,
        })
    }

    /// Apply the result of a request
    ///
    /// A failure of the latest request is returned as a fetch error; the
    /// displayed summary, if any, is left untouched.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: FinReportResult<FinancialSummary>,
    ) -> FinReportResult<FetchOutcome> {
        if ticket.seq != self.issued {
            debug!(
                seq = ticket.seq,
                latest = self.issued,
                "discarding response to superseded request"
            );
            return Ok(FetchOutcome::Stale);
        }

        self.loading = false;

        match result {
            Ok(summary) => {
                info!(seq = ticket.seq, period = %ticket.period, "report received");
                self.displayed = Some(Displayed {
                    period: ticket.period,
                    summary,
                });
                self.last_error = None;
                self.state = ReportState::Displaying;
                Ok(FetchOutcome::Applied)
            }
            Err(err) => {
                let err = match err {
                    FinReportError::Fetch { .. } => err,
                    other => FinReportError::fetch(
                        ticket.period.granularity().fetch_failure_message(),
                        other.to_string(),
                    ),
                };
                warn!(
                    seq = ticket.seq,
                    period = %ticket.period,
                    error = ?err,
                    "report fetch failed"
                );
                self.last_error = Some(err.to_string());
                self.state = ReportState::FetchFailed;
                Err(err)
            }
        }
    }

    /// Fetch the selected period and display it
    pub fn view_report<B: ReportBackend + ?Sized>(
        &mut self,
        backend: &B,
    ) -> FinReportResult<&FinancialSummary> {
        let ticket = self.begin_fetch()?;
        let result = backend.fetch_summary(ticket.user, &ticket.period);
        self.complete_fetch(ticket, result)?;
        self.summary().ok_or_else(|| {
            FinReportError::fetch(
                self.granularity().fetch_failure_message(),
                "no summary after applied fetch",
            )
        })
    }

    /// Handle to the displayed report; `None` until a fetch has succeeded
    pub fn export_target(&self) -> Option<ExportTarget<'_>> {
        self.displayed
            .as_ref()
            .map(|d| ExportTarget::new(self.user, d.period, &d.summary))
    }

    /// Enter `Exporting`; fails when nothing is displayed
    pub fn begin_export(&mut self) -> FinReportResult<()> {
        if self.displayed.is_none() {
            return Err(FinReportError::Export("No report is displayed".into()));
        }
        self.state = ReportState::Exporting;
        Ok(())
    }

    /// Leave `Exporting`, back to the displayed report
    pub fn finish_export(&mut self) {
        if self.state == ReportState::Exporting {
            self.state = ReportState::Displaying;
        }
    }

    /// Run an export against the displayed report
    ///
    /// Returns `None` when nothing is displayed.
    pub fn export_with<T, F>(&mut self, export: F) -> Option<FinReportResult<T>>
    where
        F: FnOnce(ExportTarget<'_>) -> FinReportResult<T>,
    {
        self.begin_export().ok()?;
        let result = self.export_target().map(export);
        self.finish_export();
        result
    }
}
