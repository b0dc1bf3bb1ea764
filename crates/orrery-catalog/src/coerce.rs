//! Best-effort numeric coercion
//!
//! Catalog values arrive as numbers, numeric strings such as `"1,234.5%"`,
//! or junk. Coercion never fails loudly: anything that does not read as a
//! finite decimal number comes back as `None`.

use serde_json::Value;

/// Coerce an optional JSON value into a number
///
/// - missing or `null` → `None`
/// - JSON numbers are taken as-is
/// - strings are trimmed, stripped of `,` thousands separators and a
///   trailing `%`, then parsed as a decimal
/// - booleans, arrays and objects → `None`
pub fn to_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Null => None,
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_number_text(s),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parse loosely formatted numeric text
pub fn parse_number_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut cleaned = trimmed.replace(',', "");
    if cleaned.ends_with('%') {
        cleaned.pop();
        cleaned.truncate(cleaned.trim_end().len());
    }

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
}
