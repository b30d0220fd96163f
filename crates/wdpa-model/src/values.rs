//! Polars `AnyValue` conversions.
//!
//! Cells are compared as text, so numeric cells must render the way they were
//! written: an integral float `1.0` becomes `"1"`, `0.0` becomes `"0"`.

use polars::prelude::AnyValue;

/// Render a cell as text. Null and NaN render as `None`.
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        AnyValue::Boolean(b) => Some(if b { "1" } else { "0" }.to_string()),
        AnyValue::Int8(v) => Some(v.to_string()),
        AnyValue::Int16(v) => Some(v.to_string()),
        AnyValue::Int32(v) => Some(v.to_string()),
        AnyValue::Int64(v) => Some(v.to_string()),
        AnyValue::UInt8(v) => Some(v.to_string()),
        AnyValue::UInt16(v) => Some(v.to_string()),
        AnyValue::UInt32(v) => Some(v.to_string()),
        AnyValue::UInt64(v) => Some(v.to_string()),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        other => Some(other.to_string()),
    }
}

/// Format a float, dropping the fractional part when it is zero.
pub fn format_numeric(v: f64) -> Option<String> {
    if v.is_nan() {
        return None;
    }
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        // Integral and well inside i64 range.
        return Some((v as i64).to_string());
    }
    Some(v.to_string())
}

/// Outcome of reading a cell as a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    Value(f64),
    Missing,
    /// Non-empty text that does not parse as a number.
    Invalid(String),
}

/// Read a cell as a number. Blank text and NaN count as missing.
pub fn any_to_numeric(value: AnyValue<'_>) -> Numeric {
    match value {
        AnyValue::Null => Numeric::Missing,
        AnyValue::Int8(v) => Numeric::Value(f64::from(v)),
        AnyValue::Int16(v) => Numeric::Value(f64::from(v)),
        AnyValue::Int32(v) => Numeric::Value(f64::from(v)),
        AnyValue::Int64(v) => Numeric::Value(v as f64),
        AnyValue::UInt8(v) => Numeric::Value(f64::from(v)),
        AnyValue::UInt16(v) => Numeric::Value(f64::from(v)),
        AnyValue::UInt32(v) => Numeric::Value(f64::from(v)),
        AnyValue::UInt64(v) => Numeric::Value(v as f64),
        AnyValue::Float32(v) => finite_or_missing(f64::from(v)),
        AnyValue::Float64(v) => finite_or_missing(v),
        AnyValue::Boolean(b) => Numeric::Value(if b { 1.0 } else { 0.0 }),
        AnyValue::String(s) => parse_numeric(s),
        AnyValue::StringOwned(s) => parse_numeric(&s),
        other => parse_numeric(&other.to_string()),
    }
}

fn finite_or_missing(v: f64) -> Numeric {
    if v.is_nan() {
        Numeric::Missing
    } else {
        Numeric::Value(v)
    }
}

fn parse_numeric(text: &str) -> Numeric {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Numeric::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(v) => finite_or_missing(v),
        Err(_) => Numeric::Invalid(trimmed.to_string()),
    }
}
