//! Record normalization
//!
//! Derives typed numeric fields from the loosely typed source fields. The
//! source record is borrowed and never modified; callers get a fresh copy
//! carrying the original fields plus the derived ones.

use serde_json::{Number, Value};

use crate::coerce::to_number;
use crate::record::{PlanetRecord, fields, present};

/// Offset between Kelvin and Celsius
const KELVIN_OFFSET: f64 = 273.15;

/// Derived fields computed per request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedFields {
    pub habitability_percent_norm: Option<f64>,
    pub habitability_percent_raw: Option<String>,
    pub composite_habitability_norm: Option<f64>,
    pub avg_temp_c_norm: Option<f64>,
}

impl DerivedFields {
    /// Compute the derived fields for a record
    pub fn compute(record: &PlanetRecord) -> Self {
        let raw = present(record, fields::HABITABILITY_PERCENT);
        Self {
            habitability_percent_norm: to_number(raw),
            habitability_percent_raw: raw.map(raw_text),
            composite_habitability_norm: to_number(record.get(fields::COMPOSITE_HABITABILITY)),
            avg_temp_c_norm: avg_temp_c(record),
        }
    }

    /// Write the derived fields into `record`, overwriting any existing values
    pub fn apply_to(self, record: &mut PlanetRecord) {
        record.insert(
            fields::HABITABILITY_PERCENT_NORM.to_string(),
            number_or_null(self.habitability_percent_norm),
        );
        record.insert(
            fields::HABITABILITY_PERCENT_RAW.to_string(),
            self.habitability_percent_raw.map_or(Value::Null, Value::String),
        );
        record.insert(
            fields::COMPOSITE_HABITABILITY_NORM.to_string(),
            number_or_null(self.composite_habitability_norm),
        );
        record.insert(
            fields::AVG_TEMP_C_NORM.to_string(),
            number_or_null(self.avg_temp_c_norm),
        );
    }
}

/// Return a normalized copy of `record`
pub fn normalize(record: &PlanetRecord) -> PlanetRecord {
    let mut out = record.clone();
    DerivedFields::compute(record).apply_to(&mut out);
    out
}

/// Normalized habitability percentage, without building the full copy
pub fn habitability_percent(record: &PlanetRecord) -> Option<f64> {
    to_number(record.get(fields::HABITABILITY_PERCENT))
}

/// Average temperature in Celsius
///
/// A present `avg_temp_C` always wins, even when it does not parse. Only a
/// missing `avg_temp_C` falls back to `eq_temp_K`.
pub fn avg_temp_c(record: &PlanetRecord) -> Option<f64> {
    if let Some(celsius) = present(record, fields::AVG_TEMP_C) {
        return to_number(Some(celsius));
    }
    to_number(present(record, fields::EQ_TEMP_K)).map(|kelvin| kelvin - KELVIN_OFFSET)
}

/// Strings pass through untouched; other values use their JSON spelling
/// (`true`, `1e-5`).
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn number_or_null(value: Option<f64>) -> Value {
    value
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}
