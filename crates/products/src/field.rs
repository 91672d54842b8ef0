//! Loosely-typed attribute values.
//!
//! Data files are hand-edited: a fee may be `499`, `"499"` or `"Lifetime free"`.
//! `FieldValue` keeps whichever shape was written and offers a numeric view for
//! filtering.

use core::fmt;

use serde::{Deserialize, Serialize};

use cardcompare_core::ValueObject;

/// A product attribute as written in the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl ValueObject for FieldValue {}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Numeric interpretation of the value, if it has a finite one.
    ///
    /// Text goes through [`parse_number`], so `"1500"` is `1500.0` and
    /// `"Lifetime free"` has no numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            FieldValue::Number(_) => None,
            FieldValue::Text(s) => parse_number(s),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => f.write_str(&format_plain_number(*n)),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parse user or data text as a number.
///
/// Surrounding whitespace is ignored and blank text reads as `0`. Only finite
/// results are returned; `"abc"`, `"inf"` and `"NaN"` all yield `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Integers print without a fractional part (`500`, not `500.0`).
fn format_plain_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numbers_and_text() {
        let values: Vec<FieldValue> = serde_json::from_str(r#"[500, "Lifetime free"]"#).unwrap();
        assert_eq!(values[0], FieldValue::Number(500.0));
        assert_eq!(values[1], FieldValue::text("Lifetime free"));
    }

    #[test]
    fn numeric_view_of_text() {
        assert_eq!(FieldValue::text(" 1500 ").as_number(), Some(1500.0));
        assert_eq!(FieldValue::text("Lifetime free").as_number(), None);
        assert_eq!(FieldValue::text("").as_number(), Some(0.0));
    }

    #[test]
    fn parse_number_rejects_non_finite_spellings() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("Infinity"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("0"), Some(0.0));
    }

    #[test]
    fn display_drops_trailing_zero_fraction() {
        assert_eq!(FieldValue::Number(500.0).to_string(), "500");
        assert_eq!(FieldValue::Number(3.5).to_string(), "3.5");
        assert_eq!(FieldValue::text("3.5% + GST").to_string(), "3.5% + GST");
    }
}
