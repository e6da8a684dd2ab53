//! Report rendering
//!
//! Maps a [`FinancialSummary`] onto a fixed structure: a heading, a
//! "Report for" line with the echoed period, four labeled amounts and a
//! "Generated on" footer carrying the local date at render time. Terminal
//! output and every export format are built from the same [`ReportView`].

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{double_separator, format_header, label_value_row, separator};
use crate::models::{AmountFormat, FinancialSummary, Granularity};

const TERMINAL_WIDTH: usize = 44;

/// Formatting choices applied while rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub currency_prefix: String,
    pub amount_format: AmountFormat,
    pub date_format: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl RenderOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_prefix: settings.currency_prefix.clone(),
            amount_format: settings.amount_format,
            date_format: settings.date_format.clone(),
        }
    }
}

/// One labeled amount
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

/// A rendered report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub heading: &'static str,
    pub title: String,
    pub lines: Vec<ReportLine>,
    pub footer: String,
}

impl ReportView {
    /// Render a summary dated today in local time
    pub fn render(
        summary: &FinancialSummary,
        granularity: Granularity,
        options: &RenderOptions,
    ) -> Self {
        Self::build(
            summary,
            granularity,
            options,
            chrono::Local::now().date_naive(),
        )
    }

    /// Render a summary with an explicit generation date
    pub fn build(
        summary: &FinancialSummary,
        granularity: Granularity,
        options: &RenderOptions,
        generated_on: NaiveDate,
    ) -> Self {
        let labels = match granularity {
            Granularity::Monthly => ["Income", "Expenses", "Savings", "Balance"],
            Granularity::Yearly => ["Total Income", "Total Expenses", "Total Savings", "Balance"],
        };
        let amounts = [
            summary.total_income,
            summary.total_expenses,
            summary.total_savings,
            summary.balance,
        ];

        let lines = labels
            .into_iter()
            .zip(amounts)
            .map(|(label, amount)| ReportLine {
                label,
                value: amount.display(options.amount_format, &options.currency_prefix),
            })
            .collect();

        let heading = match granularity {
            Granularity::Monthly => "Monthly Financial Report",
            Granularity::Yearly => "Yearly Financial Report",
        };

        Self {
            heading,
            title: format!("Report for {}", summary.period_label),
            lines,
            footer: format!("Generated on {}", generated_on.format(&options.date_format)),
        }
    }

    /// Look up a rendered value by label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format_header(self.heading, TERMINAL_WIDTH));
        output.push('\n');
        output.push_str(&double_separator(TERMINAL_WIDTH));
        output.push('\n');
        output.push_str(&self.title);
        output.push_str("\n\n");

        for line in &self.lines {
            output.push_str(&label_value_row(line.label, &line.value, TERMINAL_WIDTH));
            output.push('\n');
        }

        output.push_str(&separator(TERMINAL_WIDTH));
        output.push('\n');
        output.push_str(&self.footer);
        output.push('\n');

        output
    }
}
