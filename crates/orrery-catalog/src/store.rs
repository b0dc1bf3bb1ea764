//! Catalog store
//!
//! The catalog is read once at startup and never changes afterwards.
//! Callers share it behind an `Arc` and hand `&CatalogStore` to the query
//! functions.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::record::PlanetRecord;

/// Immutable, ordered sequence of planet records
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: Vec<PlanetRecord>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of records
    ///
    /// Array elements that are not objects are skipped.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let items = match serde_json::from_str::<Value>(json)? {
            Value::Array(items) => items,
            other => return Err(CatalogError::NotAnArray(json_type_name(&other))),
        };

        let total = items.len();
        let records: Vec<PlanetRecord> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                Value::Object(record) => Some(record),
                other => {
                    warn!(index, kind = json_type_name(&other), "Skipping non-object catalog entry");
                    None
                }
            })
            .collect();

        debug!(total, kept = records.len(), skipped = total - records.len(), "Parsed catalog");
        Ok(Self { records })
    }

    /// Read and parse the catalog file at `path`
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
            _ => CatalogError::from(e),
        })?;

        let store = Self::from_json_str(&contents)?;
        info!(path = %path.display(), records = store.len(), "Loaded catalog");
        Ok(store)
    }

    /// Load the catalog, falling back to an empty store on any error
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => store,
            Err(CatalogError::NotFound(_)) => {
                warn!(path = %path.display(), "Catalog file not found, serving an empty catalog");
                Self::empty()
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to load catalog, serving an empty catalog");
                Self::empty()
            }
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in catalog order
    pub fn records(&self) -> &[PlanetRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanetRecord> {
        self.records.iter()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
