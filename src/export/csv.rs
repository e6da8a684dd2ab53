//! CSV export of a displayed report
//!
//! One row per labeled amount: raw value and the value as displayed.

use crate::error::{FinReportError, FinReportResult};
use crate::reports::{ExportTarget, ReportView};

/// Render a report as CSV
pub fn render_csv(target: ExportTarget<'_>, view: &ReportView) -> FinReportResult<Vec<u8>> {
    let summary = target.summary();
    let amounts = [
        summary.total_income,
        summary.total_expenses,
        summary.total_savings,
        summary.balance,
    ];
    let period = target.period().key();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Period", "Label", "Amount", "Displayed"])
        .map_err(|e| FinReportError::Export(e.to_string()))?;

    for (line, amount) in view.lines.iter().zip(amounts) {
        writer
            .write_record([
                period.as_str(),
                line.label,
                amount.to_string().as_str(),
                line.value.as_str(),
            ])
            .map_err(|e| FinReportError::Export(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| FinReportError::Export(format!("Failed to flush CSV: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AmountFormat, FinancialSummary, Granularity, ReportPeriod, UserId};
    use crate::reports::RenderOptions;
    use chrono::NaiveDate;

    #[test]
    fn test_csv_rows() {
        let summary = FinancialSummary::new("2024-03", 5000.0, 3000.5, 1000.0, 999.5);
        let period = ReportPeriod::month(2024, 3).unwrap();
        let target = ExportTarget::new(UserId::new(1), period, &summary);
        let options = RenderOptions {
            currency_prefix: "Rs. ".into(),
            amount_format: AmountFormat::Fixed { decimals: 2 },
            date_format: "%Y-%m-%d".into(),
        };
        let view = ReportView::build(
            &summary,
            Granularity::Monthly,
            &options,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        );

        let text = String::from_utf8(render_csv(target, &view).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Period,Label,Amount,Displayed");
        assert_eq!(lines[1], "2024-03,Income,5000,Rs. 5000.00");
        assert_eq!(lines[2], "2024-03,Expenses,3000.5,Rs. 3000.50");
        assert_eq!(lines.len(), 5);
    }
}
