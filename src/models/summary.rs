//! Aggregate report returned by the backend
//!
//! Both report endpoints return the same four totals; the monthly one echoes
//! the period back under `month`, the yearly one under `year`.

use serde::{Deserialize, Deserializer, Serialize};

use super::amount::Amount;

/// Totals for one user and one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Period label as echoed by the backend; display only
    #[serde(alias = "month", alias = "year", deserialize_with = "label_from_any")]
    pub period_label: String,
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub total_savings: Amount,
    /// May be negative
    pub balance: Amount,
}

impl FinancialSummary {
    pub fn new(
        period_label: impl Into<String>,
        total_income: impl Into<Amount>,
        total_expenses: impl Into<Amount>,
        total_savings: impl Into<Amount>,
        balance: impl Into<Amount>,
    ) -> Self {
        Self {
            period_label: period_label.into(),
            total_income: total_income.into(),
            total_expenses: total_expenses.into(),
            total_savings: total_savings.into(),
            balance: balance.into(),
        }
    }
}

/// The yearly endpoint may echo the year as a number
fn label_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a period label, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_body() {
        let body = r#"{"month":"2024-03","total_income":5000,"total_expenses":3000,"total_savings":1000,"balance":1000}"#;
        let summary: FinancialSummary = serde_json::from_str(body).unwrap();
        assert_eq!(
            summary,
            FinancialSummary::new("2024-03", 5000.0, 3000.0, 1000.0, 1000.0)
        );
    }

    #[test]
    fn test_yearly_body_with_numeric_year() {
        let body = r#"{"year":2023,"total_income":60000.5,"total_expenses":70000,"total_savings":0,"balance":-9999.5}"#;
        let summary: FinancialSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.period_label, "2023");
        assert!(summary.balance.is_negative());
    }

    #[test]
    fn test_rejects_missing_totals() {
        let body = r#"{"month":"2024-03","total_income":5000}"#;
        assert!(serde_json::from_str::<FinancialSummary>(body).is_err());
    }

    #[test]
    fn test_rejects_non_scalar_label() {
        let body = r#"{"month":null,"total_income":1,"total_expenses":1,"total_savings":1,"balance":0}"#;
        assert!(serde_json::from_str::<FinancialSummary>(body).is_err());
    }
}
