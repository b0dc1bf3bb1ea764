//! JSON API handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use orrery_catalog::{Category, PlanetRecord, query};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Default number of search results
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Default number of leaderboard entries
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Leaderboard used when no category is given
pub const DEFAULT_CATEGORY: &str = "most_habitable";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TopParams {
    pub cat: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct PlanetParams {
    #[serde(default)]
    pub name: String,
}

/// `GET /api/all`
pub async fn all(State(state): State<AppState>) -> Json<Vec<PlanetRecord>> {
    Json(query::all(&state.catalog))
}

/// `GET /api/search?q=&limit=`
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<PlanetRecord>>> {
    let Query(params) = params?;
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

    let results = query::search(&state.catalog, &params.q, limit);
    debug!(query = %params.q, limit, results = results.len(), "Search");
    Ok(Json(results))
}

/// `GET /api/top?cat=&limit=`
pub async fn top(
    State(state): State<AppState>,
    params: Result<Query<TopParams>, QueryRejection>,
) -> ApiResult<Json<Vec<PlanetRecord>>> {
    let Query(params) = params?;
    let tag = params.cat.as_deref().unwrap_or(DEFAULT_CATEGORY);
    let category = Category::from_tag(tag);
    let limit = params.limit.unwrap_or(DEFAULT_TOP_LIMIT);

    let results = query::top(&state.catalog, category, limit);
    debug!(tag, category = %category, limit, results = results.len(), "Leaderboard");
    Ok(Json(results))
}

/// `GET /api/random`
pub async fn random(State(state): State<AppState>) -> ApiResult<Json<PlanetRecord>> {
    let planet = query::random_pick(&state.catalog, &mut rand::rng())?;
    Ok(Json(planet))
}

/// `GET /api/planet?name=`
pub async fn planet(
    State(state): State<AppState>,
    params: Result<Query<PlanetParams>, QueryRejection>,
) -> ApiResult<Json<PlanetRecord>> {
    let Query(params) = params?;
    if params.name.trim().is_empty() {
        return Err(ApiError::BadRequest("missing planet name".to_string()));
    }

    query::find_by_name(&state.catalog, &params.name)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("planet not found".to_string()))
}

/// `POST /api/contact`
///
/// Accepts any JSON body and only logs it. An empty body counts as `{}`.
pub async fn contact(body: Bytes) -> ApiResult<Json<Value>> {
    let payload = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice::<Value>(&body)
            .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?
    };

    info!(payload = %payload, "Contact form submission");
    Ok(Json(json!({ "ok": true })))
}

/// `GET /planets.json`: the catalog exactly as loaded, without derived fields
pub async fn raw_catalog(State(state): State<AppState>) -> Json<Vec<PlanetRecord>> {
    Json(state.catalog.records().to_vec())
}
