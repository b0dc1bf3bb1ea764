//! Integration tests for orrery-catalog
//!
//! Loads catalogs from disk and runs the query engine over them.

use std::fs;

use orrery_catalog::{CatalogError, CatalogStore, Category, query};
use serde_json::json;
use tempfile::TempDir;

fn write_catalog(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("planets.json");
    fs::write(&path, contents).expect("Failed to write catalog");
    path
}

fn sample_catalog() -> String {
    json!([
        {
            "name": "Earth",
            "radius": 1.0,
            "mass": 1.0,
            "surface_gravity": 1.0,
            "avg_temp_C": 14.85,
            "orbital_period_days": 365.25,
            "habitability_percent": "99.77800",
            "composite_habitability": "0.99778",
            "is_rocky": true,
            "is_gas_giant": false,
            "narrative_flags": {}
        },
        {
            "name": "Kepler-452b",
            "pl_rade": 1.63,
            "pl_bmasse": "5,000",
            "eq_temp_K": 265,
            "orbital_period_days": "384.8",
            "habitability_percent": "83.1%"
        },
        {
            "name": "Mars",
            "radius": 0.532,
            "mass": 0.107,
            "surface_gravity": 0.38,
            "avg_temp_C": -63,
            "orbital_period_days": 687,
            "habitability_percent": "0.9"
        },
        {
            "name": "Marsh World",
            "surface_gravity": "0.38",
            "habitability_percent": null
        }
    ])
    .to_string()
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, &sample_catalog());

    let store = CatalogStore::load(&path).expect("Failed to load catalog");
    assert_eq!(store.len(), 4);
    assert_eq!(store.records()[0]["name"], json!("Earth"));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = CatalogStore::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(p) if p == path));
    assert!(CatalogStore::load_or_empty(&path).is_empty());
}

#[test]
fn test_load_or_empty_on_garbage() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "this is not json");

    assert!(matches!(CatalogStore::load(&path), Err(CatalogError::Parse(_))));
    assert!(CatalogStore::load_or_empty(&path).is_empty());
}

#[test]
fn test_queries_over_loaded_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, &sample_catalog());
    let store = CatalogStore::load(&path).unwrap();

    let hits = query::search(&store, "mar", 10);
    let hit_names: Vec<_> = hits.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(hit_names, ["Mars", "Marsh World"]);

    let habitable = query::top(&store, Category::MostHabitable, 5);
    let habitable_names: Vec<_> = habitable
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(habitable_names, ["Kepler-452b", "Mars"]);

    let massive = query::top(&store, Category::MostMass, 1);
    assert_eq!(massive[0]["name"], json!("Kepler-452b"));

    let low_gravity = query::top(&store, Category::LowestGravity, 5);
    let low_names: Vec<_> = low_gravity
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(low_names, ["Mars", "Marsh World", "Earth"]);
}

#[test]
fn test_random_pick_over_loaded_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, &sample_catalog());
    let store = CatalogStore::load(&path).unwrap();

    let mut rng = rand::rng();
    for _ in 0..20 {
        let pick = query::random_pick(&store, &mut rng).unwrap();
        let name = pick["name"].as_str().unwrap();
        assert!(name == "Earth" || name == "Kepler-452b", "unexpected pick {name}");
    }
}

#[test]
fn test_store_unchanged_by_queries() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, &sample_catalog());
    let store = CatalogStore::load(&path).unwrap();
    let before = store.records().to_vec();

    let _ = query::all(&store);
    let _ = query::top(&store, Category::Hottest, 10);
    let _ = query::search(&store, "e", 10);

    assert_eq!(store.records(), before.as_slice());
}
