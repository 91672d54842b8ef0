//! Currency formatting for fee and deposit fields.

use serde::{Deserialize, Serialize};

use cardcompare_core::ValueObject;

use crate::field::FieldValue;

/// Digit grouping convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// `1,00,000`: last three digits, then pairs.
    #[default]
    Indian,
    /// `100,000`: groups of three.
    Western,
}

/// Whole-unit currency formatter (no decimal places).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: Grouping,
}

impl ValueObject for CurrencyFormat {}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            grouping: Grouping::Indian,
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, grouping: Grouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    /// Format an amount rounded half away from zero to whole units.
    pub fn format_amount(&self, amount: f64) -> String {
        let rounded = amount.round();
        let digits = format!("{:.0}", rounded.abs());
        let grouped = group_digits(&digits, self.grouping);
        if rounded < 0.0 {
            format!("-{}{}", self.symbol, grouped)
        } else {
            format!("{}{}", self.symbol, grouped)
        }
    }

    /// Numbers are formatted as currency; text passes through unchanged.
    pub fn format_field(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::Number(n) if n.is_finite() => self.format_amount(*n),
            other => other.to_string(),
        }
    }
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_indian_grouping() {
        let inr = CurrencyFormat::default();
        assert_eq!(inr.format_amount(0.0), "₹0");
        assert_eq!(inr.format_amount(500.0), "₹500");
        assert_eq!(inr.format_amount(1500.0), "₹1,500");
        assert_eq!(inr.format_amount(100000.0), "₹1,00,000");
        assert_eq!(inr.format_amount(12345678.0), "₹1,23,45,678");
    }

    #[test]
    fn formats_western_grouping() {
        let usd = CurrencyFormat::new("$", Grouping::Western);
        assert_eq!(usd.format_amount(1234567.0), "$1,234,567");
        assert_eq!(usd.format_amount(999.0), "$999");
    }

    #[test]
    fn rounds_to_whole_units() {
        let inr = CurrencyFormat::default();
        assert_eq!(inr.format_amount(499.5), "₹500");
        assert_eq!(inr.format_amount(2999.4), "₹2,999");
        assert_eq!(inr.format_amount(-0.2), "₹0");
        assert_eq!(inr.format_amount(-1500.0), "-₹1,500");
    }

    #[test]
    fn text_passes_through() {
        let inr = CurrencyFormat::default();
        assert_eq!(
            inr.format_field(&FieldValue::text("Lifetime free")),
            "Lifetime free"
        );
        assert_eq!(inr.format_field(&FieldValue::Number(2500.0)), "₹2,500");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: grouping only inserts separators, never changes digits.
            #[test]
            fn grouping_preserves_digits(amount in 0u64..100_000_000_000u64, western in any::<bool>()) {
                let grouping = if western { Grouping::Western } else { Grouping::Indian };
                let formatted = CurrencyFormat::new("₹", grouping).format_amount(amount as f64);
                let digits = formatted.trim_start_matches('₹').replace(',', "");
                prop_assert_eq!(digits, amount.to_string());
            }
        }
    }
}
