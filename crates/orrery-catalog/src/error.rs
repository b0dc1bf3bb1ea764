//! Error types for orrery-catalog
//!
//! Unparseable field values are never errors; they normalize to `null`.
//! The variants here cover loading the catalog file and queries that
//! need at least one record.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or querying the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file does not exist
    #[error("Catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error while reading the catalog file
    #[error("I/O error: {0}")]
    Io(String),

    /// Catalog content is not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Catalog content is valid JSON but not an array of records
    #[error("Catalog must be a JSON array, found {0}")]
    NotAnArray(&'static str),

    /// Operation requires at least one record
    #[error("No planets available")]
    Empty,
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
