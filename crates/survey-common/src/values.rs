//! Polars `AnyValue` conversions used when coercing survey cells.
//!
//! Ingestion coerces every schema column exactly once. Numeric columns go
//! through [`any_to_number`], categorical and free-text columns through
//! [`any_to_text`]. Export and previews use [`display_value`].

use polars::prelude::AnyValue;

/// Result of coercing one cell of a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericCell {
    /// Null or empty source cell.
    Null,
    /// Parsed numeric value.
    Number(f64),
    /// Non-empty cell that is not a number; carries the raw text.
    Invalid(String),
}

/// Coerces a cell of a numeric column.
///
/// Integer and float values are widened to `f64`. NaN counts as null and
/// infinities are invalid, matching how text cells parse. Strings are parsed
/// after trimming; empty strings count as null.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use survey_common::{NumericCell, any_to_number};
///
/// assert_eq!(any_to_number(AnyValue::Int64(42)), NumericCell::Number(42.0));
/// assert_eq!(any_to_number(AnyValue::String("")), NumericCell::Null);
/// ```
pub fn any_to_number(value: AnyValue<'_>) -> NumericCell {
    match value {
        AnyValue::Null => NumericCell::Null,
        AnyValue::Int8(v) => NumericCell::Number(f64::from(v)),
        AnyValue::Int16(v) => NumericCell::Number(f64::from(v)),
        AnyValue::Int32(v) => NumericCell::Number(f64::from(v)),
        AnyValue::Int64(v) => NumericCell::Number(v as f64),
        AnyValue::UInt8(v) => NumericCell::Number(f64::from(v)),
        AnyValue::UInt16(v) => NumericCell::Number(f64::from(v)),
        AnyValue::UInt32(v) => NumericCell::Number(f64::from(v)),
        AnyValue::UInt64(v) => NumericCell::Number(v as f64),
        AnyValue::Float32(v) => float_to_number(f64::from(v)),
        AnyValue::Float64(v) => float_to_number(v),
        AnyValue::String(s) => text_to_number(s),
        AnyValue::StringOwned(s) => text_to_number(s.as_str()),
        other => NumericCell::Invalid(other.to_string()),
    }
}

/// Coerces a cell of a categorical or free-text column.
///
/// Values are kept verbatim. Null and empty strings yield `None`; numbers
/// are rendered without trailing zeros so a coded column like `1.0` reads `1`.
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    let text = display_value(value);
    if text.is_empty() { None } else { Some(text) }
}

/// Renders any cell for display. Null renders as the empty string.
pub fn display_value(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "True" } else { "False" }.to_string(),
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Formats a float without trailing zeros after the decimal point.
///
/// # Examples
///
/// ```
/// use survey_common::format_numeric;
///
/// assert_eq!(format_numeric(40.0), "40");
/// assert_eq!(format_numeric(3.50), "3.5");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() || trimmed == "-" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Parses trimmed text as a finite `f64`. Empty or invalid text yields `None`.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn text_to_number(value: &str) -> NumericCell {
    if value.trim().is_empty() {
        return NumericCell::Null;
    }
    match parse_number(value) {
        Some(number) => NumericCell::Number(number),
        None => NumericCell::Invalid(value.to_string()),
    }
}

fn float_to_number(value: f64) -> NumericCell {
    if value.is_nan() {
        NumericCell::Null
    } else if value.is_infinite() {
        NumericCell::Invalid(value.to_string())
    } else {
        NumericCell::Number(value)
    }
}
