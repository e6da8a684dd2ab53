//! Currency amounts as reported by the backend
//!
//! The backend performs all arithmetic and returns plain JSON numbers, so an
//! amount is kept exactly as received and only formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency-denominated amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Format the bare number according to `format`
    pub fn format(&self, format: AmountFormat) -> String {
        match format {
            AmountFormat::Native => self.0.to_string(),
            AmountFormat::Fixed { decimals } => {
                let rendered = format!("{:.*}", decimals as usize, self.0);
                // "-0.00" reads as a debit that isn't there
                if rendered.starts_with('-') && rendered[1..].chars().all(|c| c == '0' || c == '.')
                {
                    rendered[1..].to_string()
                } else {
                    rendered
                }
            }
        }
    }

    /// Format with the currency prefix, e.g. "Rs. 5000"
    pub fn display(&self, format: AmountFormat, prefix: &str) -> String {
        format!("{}{}", prefix, self.format(format))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(AmountFormat::Native))
    }
}

/// How amounts are stringified for display and export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum AmountFormat {
    /// Plain numeric stringification: 5000 -> "5000", 1234.5 -> "1234.5"
    #[default]
    Native,
    /// Rounded to a fixed number of decimal places
    Fixed { decimals: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_format() {
        assert_eq!(Amount::new(5000.0).format(AmountFormat::Native), "5000");
        assert_eq!(Amount::new(1234.5).format(AmountFormat::Native), "1234.5");
        assert_eq!(Amount::new(-250.0).format(AmountFormat::Native), "-250");
    }

    #[test]
    fn test_fixed_format() {
        let two = AmountFormat::Fixed { decimals: 2 };
        assert_eq!(Amount::new(5000.0).format(two), "5000.00");
        assert_eq!(Amount::new(1234.567).format(two), "1234.57");
        assert_eq!(Amount::new(-0.001).format(two), "0.00");
        assert_eq!(Amount::new(-12.5).format(two), "-12.50");
        assert_eq!(
            Amount::new(99.6).format(AmountFormat::Fixed { decimals: 0 }),
            "100"
        );
    }

    #[test]
    fn test_display_with_prefix() {
        assert_eq!(
            Amount::new(1000.0).display(AmountFormat::Native, "Rs. "),
            "Rs. 1000"
        );
    }

    #[test]
    fn test_deserialize_any_json_number() {
        let a: Amount = serde_json::from_str("5000").unwrap();
        assert_eq!(a, Amount::new(5000.0));
        let b: Amount = serde_json::from_str("-12.25").unwrap();
        assert!(b.is_negative());
    }

    #[test]
    fn test_amount_format_settings_shape() {
        let json = serde_json::to_string(&AmountFormat::Fixed { decimals: 2 }).unwrap();
        assert_eq!(json, r#"{"style":"fixed","decimals":2}"#);
        let native: AmountFormat = serde_json::from_str(r#"{"style":"native"}"#).unwrap();
        assert_eq!(native, AmountFormat::Native);
    }
}
