//! Query engine
//!
//! Stateless reads over a [`CatalogStore`]. Every record handed back is a
//! normalized copy; the store itself is only borrowed.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::trace;

use crate::category::Category;
use crate::error::{CatalogError, CatalogResult};
use crate::normalize::{self, normalize};
use crate::record::{self, PlanetRecord};
use crate::store::CatalogStore;

/// Habitability a record must exceed to be picked at random
pub const RANDOM_PICK_THRESHOLD: f64 = 1.0;

/// Name excluded from the habitability leaderboard
const HOME_PLANET: &str = "earth";

/// Every record, normalized, in catalog order
pub fn all(store: &CatalogStore) -> Vec<PlanetRecord> {
    store.iter().map(normalize).collect()
}

/// Case-insensitive substring search on `name`
///
/// Names starting with the query come first, then names that only contain
/// it. Catalog order is kept within each group. A blank query matches
/// nothing.
pub fn search(store: &CatalogStore, query: &str, limit: usize) -> Vec<PlanetRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let (prefixed, contained): (Vec<_>, Vec<_>) = store
        .iter()
        .filter_map(|r| record::name(r).map(|name| (name.to_lowercase(), r)))
        .filter(|(name, _)| name.contains(&needle))
        .partition(|(name, _)| name.starts_with(&needle));

    trace!(
        query = %needle,
        prefixed = prefixed.len(),
        contained = contained.len(),
        "Search matched"
    );

    prefixed
        .into_iter()
        .chain(contained)
        .take(limit)
        .map(|(_, r)| normalize(r))
        .collect()
}

/// Top `limit` records for a leaderboard category
///
/// Records without a usable key are dropped. Ties keep catalog order.
/// [`Category::Unranked`] returns the catalog as-is.
pub fn top(store: &CatalogStore, category: Category, limit: usize) -> Vec<PlanetRecord> {
    let Some(spec) = category.rank_spec() else {
        return store.iter().take(limit).map(normalize).collect();
    };

    let mut ranked: Vec<(f64, &PlanetRecord)> = store
        .iter()
        .filter(|r| !(spec.exclude_earth && is_home_planet(r)))
        .filter_map(|r| spec.key.extract(r).map(|key| (key, r)))
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| spec.direction.compare(a.0, b.0));

    trace!(category = %category, ranked = ranked.len(), "Ranked catalog");

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, r)| normalize(r))
        .collect()
}

/// Pick one record uniformly at random
///
/// Draws from records whose normalized habitability exceeds
/// [`RANDOM_PICK_THRESHOLD`]. When none qualify the whole catalog is used.
pub fn random_pick<R>(store: &CatalogStore, rng: &mut R) -> CatalogResult<PlanetRecord>
where
    R: Rng + ?Sized,
{
    if store.is_empty() {
        return Err(CatalogError::Empty);
    }

    let eligible: Vec<&PlanetRecord> = store
        .iter()
        .filter(|r| is_eligible(r))
        .collect();

    let picked = if eligible.is_empty() {
        store.records().choose(rng)
    } else {
        eligible.choose(rng).copied()
    };

    picked.map(normalize).ok_or(CatalogError::Empty)
}

/// Find a record by name
///
/// An exact case-insensitive match wins over the first record whose name
/// contains `name`.
pub fn find_by_name(store: &CatalogStore, name: &str) -> Option<PlanetRecord> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let lowered = || {
        store
            .iter()
            .filter_map(|r| record::name(r).map(|n| (n.to_lowercase(), r)))
    };

    lowered()
        .find(|(n, _)| *n == needle)
        .or_else(|| lowered().find(|(n, _)| n.contains(&needle)))
        .map(|(_, r)| normalize(r))
}

fn is_eligible(record: &PlanetRecord) -> bool {
    normalize::habitability_percent(record).is_some_and(|h| h > RANDOM_PICK_THRESHOLD)
}

fn is_home_planet(record: &PlanetRecord) -> bool {
    record::name(record).is_some_and(|n| n.to_lowercase() == HOME_PLANET)
}
