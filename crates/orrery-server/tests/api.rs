//! HTTP API tests
//!
//! Drive the router in-process with `oneshot`, no listener involved.

use std::collections::HashSet;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use orrery_catalog::CatalogStore;
use orrery_server::{AppState, router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(catalog: Value) -> Router {
    orrery_logging::init_testing();
    let store = CatalogStore::from_json_str(&catalog.to_string()).expect("valid test catalog");
    router(AppState::new(store))
}

fn sample() -> Router {
    app(json!([
        {
            "name": "Earth",
            "mass": 1.0,
            "radius": 1.0,
            "surface_gravity": 1.0,
            "avg_temp_C": 14.85,
            "orbital_period_days": 365.25,
            "habitability_percent": "99.77800",
            "composite_habitability": "0.99778"
        },
        {
            "name": "Mars",
            "mass": 0.107,
            "surface_gravity": 0.38,
            "avg_temp_C": -63,
            "orbital_period_days": 687,
            "habitability_percent": "0.9"
        },
        {
            "name": "Marsh",
            "pl_bmasse": "12",
            "eq_temp_K": 250.0,
            "habitability_percent": "61.5%"
        },
        {
            "name": "Venus",
            "mass": 0.815,
            "surface_gravity": 0.9,
            "avg_temp_C": 464,
            "orbital_period_days": 224.7
        }
    ]))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("response is JSON");
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_all_returns_normalized_records() {
    let (status, body) = get(sample(), "/api/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Earth", "Mars", "Marsh", "Venus"]);

    let marsh = &body[2];
    let temp = marsh["avg_temp_C_norm"].as_f64().unwrap();
    assert!((temp + 23.15).abs() < 1e-9);
    assert_eq!(marsh["habitability_percent_norm"], json!(61.5));
    assert_eq!(marsh["habitability_percent_raw"], json!("61.5%"));
    assert_eq!(body[3]["habitability_percent_norm"], Value::Null);
    assert_eq!(body[3]["habitability_percent_raw"], Value::Null);
}

#[tokio::test]
async fn test_all_on_empty_catalog() {
    let (status, body) = get(app(json!([])), "/api/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_prefix_matches_first() {
    let (status, body) = get(sample(), "/api/search?q=MAR").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Mars", "Marsh"]);

    let (_, body) = get(sample(), "/api/search?q=ar").await;
    assert_eq!(names(&body), ["Earth", "Mars", "Marsh"]);
}

#[tokio::test]
async fn test_search_limit_and_blank_query() {
    let (_, body) = get(sample(), "/api/search?q=mar&limit=1").await;
    assert_eq!(names(&body), ["Mars"]);

    let (status, body) = get(sample(), "/api/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, body) = get(sample(), "/api/search?q=%20%20").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_default_limit_is_ten() {
    let catalog: Vec<Value> = (0..15).map(|i| json!({"name": format!("Kepler-{i}")})).collect();
    let (_, body) = get(app(Value::Array(catalog)), "/api/search?q=kepler").await;
    assert_eq!(body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_search_rejects_bad_limit() {
    let (status, body) = get(sample(), "/api/search?q=mar&limit=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = get(sample(), "/api/top?limit=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_top_defaults_to_most_habitable_without_earth() {
    let (status, body) = get(sample(), "/api/top").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Marsh", "Mars"]);
}

#[tokio::test]
async fn test_top_categories() {
    let (_, body) = get(sample(), "/api/top?cat=most_hot").await;
    assert_eq!(names(&body), ["Venus", "Earth", "Marsh", "Mars"]);

    let (_, body) = get(sample(), "/api/top?cat=most_temperature&limit=1").await;
    assert_eq!(names(&body), ["Venus"]);

    let (_, body) = get(sample(), "/api/top?cat=coldest&limit=2").await;
    assert_eq!(names(&body), ["Mars", "Marsh"]);

    let (_, body) = get(sample(), "/api/top?cat=most_mass").await;
    assert_eq!(names(&body), ["Marsh", "Earth", "Venus", "Mars"]);

    let (_, body) = get(sample(), "/api/top?cat=lowest_gravity").await;
    assert_eq!(names(&body), ["Mars", "Venus", "Earth"]);

    let (_, body) = get(sample(), "/api/top?cat=shortest_orbital_period").await;
    assert_eq!(names(&body), ["Venus", "Earth", "Mars"]);

    let (_, body) = get(sample(), "/api/top?cat=largest_radius").await;
    assert_eq!(names(&body), ["Earth"]);
}

#[tokio::test]
async fn test_top_unknown_category_is_catalog_order() {
    let (status, body) = get(sample(), "/api/top?cat=prettiest&limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Earth", "Mars", "Marsh"]);
    assert!(body[0].get("avg_temp_C_norm").is_some());
}

#[tokio::test]
async fn test_random_prefers_habitable() {
    let app = sample();
    for _ in 0..20 {
        let (status, body) = get(app.clone(), "/api/random").await;
        assert_eq!(status, StatusCode::OK);
        let name = body["name"].as_str().unwrap();
        assert!(name == "Earth" || name == "Marsh", "unexpected pick {name}");
    }
}

#[tokio::test]
async fn test_random_falls_back_to_whole_catalog() {
    let app = app(json!([
        {"name": "A", "habitability_percent": "0.2"},
        {"name": "B"}
    ]));

    let mut seen = HashSet::new();
    for _ in 0..100 {
        let (status, body) = get(app.clone(), "/api/random").await;
        assert_eq!(status, StatusCode::OK);
        seen.insert(body["name"].as_str().unwrap().to_string());
    }
    assert_eq!(seen.len(), 2);
}

#[tokio::test]
async fn test_random_on_empty_catalog() {
    let (status, body) = get(app(json!([])), "/api/random").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "no planets available"}));
}

#[tokio::test]
async fn test_planet_lookup() {
    let (status, body) = get(sample(), "/api/planet?name=mars").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("Mars"));
    assert!(body.get("habitability_percent_norm").is_some());

    let (_, body) = get(sample(), "/api/planet?name=ven").await;
    assert_eq!(body["name"], json!("Venus"));

    let (status, body) = get(sample(), "/api/planet?name=Pluto").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "planet not found"}));

    let (status, _) = get(sample(), "/api/planet").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_contact_accepts_any_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email": "a@b.c", "message": ["hi", 1]}"#))
        .unwrap();
    let (status, body) = send(sample(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));

    let empty = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(sample(), empty).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn test_contact_rejects_invalid_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(sample(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid JSON"));
}

#[tokio::test]
async fn test_raw_catalog_has_no_derived_fields() {
    let (status, body) = get(sample(), "/planets.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Earth", "Mars", "Marsh", "Venus"]);
    assert!(body[0].get("habitability_percent_norm").is_none());
    assert_eq!(body[0]["habitability_percent"], json!("99.77800"));
}
