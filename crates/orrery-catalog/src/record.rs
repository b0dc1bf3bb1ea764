//! Planet records
//!
//! Records are open JSON objects. The catalog file is heterogeneous, so any
//! record may be missing any field and field types are not enforced.

use serde_json::{Map, Value};

/// A single catalog entry: field name to JSON value
pub type PlanetRecord = Map<String, Value>;

/// Field names read or written by the query engine
pub mod fields {
    pub const NAME: &str = "name";

    pub const HABITABILITY_PERCENT: &str = "habitability_percent";
    pub const COMPOSITE_HABITABILITY: &str = "composite_habitability";
    pub const AVG_TEMP_C: &str = "avg_temp_C";
    pub const EQ_TEMP_K: &str = "eq_temp_K";

    pub const MASS: &str = "mass";
    pub const PL_BMASSE: &str = "pl_bmasse";
    pub const BMASSE: &str = "bmasse";
    pub const RADIUS: &str = "radius";
    pub const PL_RADE: &str = "pl_rade";
    pub const DENSITY_REL: &str = "density_rel";
    pub const DENSITY: &str = "density";
    pub const SURFACE_GRAVITY: &str = "surface_gravity";
    pub const ORBITAL_PERIOD_DAYS: &str = "orbital_period_days";

    // Derived
    pub const HABITABILITY_PERCENT_NORM: &str = "habitability_percent_norm";
    pub const HABITABILITY_PERCENT_RAW: &str = "habitability_percent_raw";
    pub const COMPOSITE_HABITABILITY_NORM: &str = "composite_habitability_norm";
    pub const AVG_TEMP_C_NORM: &str = "avg_temp_C_norm";
}

/// Look up a field, treating JSON `null` the same as a missing key
pub fn present<'a>(record: &'a PlanetRecord, field: &str) -> Option<&'a Value> {
    record.get(field).filter(|v| !v.is_null())
}

/// The record's name, if it has a non-empty string name
pub fn name(record: &PlanetRecord) -> Option<&str> {
    record
        .get(fields::NAME)
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
}
