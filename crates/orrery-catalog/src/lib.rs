//! # Orrery Catalog
//!
//! In-memory planet catalog and the query engine that serves it.
//!
//! The catalog is a JSON array of loosely typed planet records, loaded once
//! into a [`CatalogStore`] and never modified. Queries borrow the store and
//! return normalized copies of the matching records, with four derived
//! fields added:
//!
//! - `habitability_percent_norm`: numeric `habitability_percent`
//! - `habitability_percent_raw`: `habitability_percent` as text
//! - `composite_habitability_norm`: numeric `composite_habitability`
//! - `avg_temp_C_norm`: `avg_temp_C`, or `eq_temp_K` converted to Celsius
//!
//! ## Example
//!
//! ```rust,ignore
//! use orrery_catalog::{CatalogStore, Category, query};
//!
//! let store = CatalogStore::load("planets.json")?;
//!
//! let hits = query::search(&store, "kepler", 10);
//! let leaders = query::top(&store, Category::from_tag("most_mass"), 5);
//! let surprise = query::random_pick(&store, &mut rand::rng())?;
//! ```

pub mod category;
pub mod coerce;
pub mod error;
pub mod normalize;
pub mod query;
pub mod record;
pub mod store;

pub use category::{Category, Direction, KeySource, RankSpec};
pub use coerce::to_number;
pub use error::{CatalogError, CatalogResult};
pub use normalize::{DerivedFields, normalize};
pub use record::PlanetRecord;
pub use store::CatalogStore;
