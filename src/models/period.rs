//! Report period representation
//!
//! A report covers exactly one month or one year. Monthly periods key as
//! `YYYY-MM`, yearly periods as `YYYY`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FinReportError, FinReportResult};

/// Number of years offered on either side of the current year
pub const YEAR_SPAN: i32 = 5;

/// Whether a report targets a month or a whole year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Monthly,
    Yearly,
}

impl Granularity {
    /// Prompt shown when a report is requested with nothing selected
    pub fn missing_selection_prompt(&self) -> &'static str {
        match self {
            Self::Monthly => "Please select a month!",
            Self::Yearly => "Please select a year!",
        }
    }

    /// Message shown when the backend can't produce the report
    pub fn fetch_failure_message(&self) -> &'static str {
        match self {
            Self::Monthly => {
                "Unable to fetch report. Please make sure the report backend is running."
            }
            Self::Yearly => "Unable to fetch yearly report. Ensure the report backend is running.",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// A month or a year to report on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ReportPeriod {
    /// A calendar month (e.g., "2025-01")
    Month { year: i32, month: u32 },

    /// A calendar year (e.g., "2025")
    Year { year: i32 },
}

impl ReportPeriod {
    /// Create a monthly period, rejecting months outside 1-12
    pub fn month(year: i32, month: u32) -> FinReportResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(FinReportError::Validation(format!(
                "Invalid month: {}",
                month
            )));
        }
        Ok(Self::Month { year, month })
    }

    /// Create a yearly period
    pub fn year(year: i32) -> Self {
        Self::Year { year }
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            Self::Month { .. } => Granularity::Monthly,
            Self::Year { .. } => Granularity::Yearly,
        }
    }

    /// Canonical period key used in request paths and export filenames
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Parse month-control input
    ///
    /// Accepts "2025-01", "2025-1" and a full date such as "2025-01-15",
    /// which must name a real day.
    pub fn parse_month(input: &str) -> FinReportResult<Self> {
        let s = input.trim();
        let invalid =
            || FinReportError::Validation(format!("Invalid month: {}. Use YYYY-MM", s));

        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [year, month] => {
                if !is_year_digits(year) || month.len() > 2 || !is_digits(month) {
                    return Err(invalid());
                }
                let year: i32 = year.parse().map_err(|_| invalid())?;
                let month: u32 = month.parse().map_err(|_| invalid())?;
                Self::month(year, month)
            }
            [year, month, day] => {
                if !is_year_digits(year) || !is_digits(month) || !is_digits(day) {
                    return Err(invalid());
                }
                let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid())?;
                Self::month(date.year(), date.month())
            }
            _ => Err(invalid()),
        }
    }

    /// Parse a four-digit year
    pub fn parse_year(input: &str) -> FinReportResult<Self> {
        let s = input.trim();
        if !is_year_digits(s) {
            return Err(FinReportError::Validation(format!(
                "Invalid year: {}. Use YYYY",
                s
            )));
        }
        let year: i32 = s.parse().map_err(|_| {
            FinReportError::Validation(format!("Invalid year: {}. Use YYYY", s))
        })?;
        Ok(Self::Year { year })
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Year { year } => write!(f, "{:04}", year),
        }
    }
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

fn is_year_digits(part: &str) -> bool {
    part.len() == 4 && is_digits(part)
}

/// The years offered by the yearly selector: `current - 5 ..= current + 5`
pub fn selectable_years(current_year: i32) -> Vec<i32> {
    ((current_year - YEAR_SPAN)..=(current_year + YEAR_SPAN)).collect()
}

/// Holds the user's current period choice for one granularity
#[derive(Debug, Clone)]
pub struct PeriodSelector {
    granularity: Granularity,
    current_year: i32,
    selection: Option<ReportPeriod>,
}

impl PeriodSelector {
    /// Create an empty selector anchored on the current local year
    pub fn new(granularity: Granularity) -> Self {
        Self::anchored(granularity, chrono::Local::now().year())
    }

    /// Create an empty selector anchored on a given year
    pub fn anchored(granularity: Granularity, current_year: i32) -> Self {
        Self {
            granularity,
            current_year,
            selection: None,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn selection(&self) -> Option<&ReportPeriod> {
        self.selection.as_ref()
    }

    /// Years this selector offers
    pub fn years(&self) -> Vec<i32> {
        selectable_years(self.current_year)
    }

    /// Select a month from month-control input
    pub fn select_month(&mut self, input: &str) -> FinReportResult<&ReportPeriod> {
        if self.granularity != Granularity::Monthly {
            return Err(FinReportError::Validation(
                "This report is yearly; select a year".into(),
            ));
        }
        let period = ReportPeriod::parse_month(input)?;
        Ok(self.selection.insert(period))
    }

    /// Select a year; it must be one of [`PeriodSelector::years`]
    pub fn select_year(&mut self, input: &str) -> FinReportResult<&ReportPeriod> {
        if self.granularity != Granularity::Yearly {
            return Err(FinReportError::Validation(
                "This report is monthly; select a month".into(),
            ));
        }
        let period = ReportPeriod::parse_year(input)?;
        if let ReportPeriod::Year { year } = period {
            if !self.years().contains(&year) {
                return Err(FinReportError::Validation(format!(
                    "Year {} is outside the selectable range {}-{}",
                    year,
                    self.current_year - YEAR_SPAN,
                    self.current_year + YEAR_SPAN
                )));
            }
        }
        Ok(self.selection.insert(period))
    }

    /// Select from raw input according to this selector's granularity
    pub fn select(&mut self, input: &str) -> FinReportResult<&ReportPeriod> {
        match self.granularity {
            Granularity::Monthly => self.select_month(input),
            Granularity::Yearly => self.select_year(input),
        }
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    /// The selected period, or the validation prompt if nothing is selected
    pub fn resolve(&self) -> FinReportResult<ReportPeriod> {
        self.selection.ok_or_else(|| {
            FinReportError::Validation(self.granularity.missing_selection_prompt().to_string())
        })
    }
}
