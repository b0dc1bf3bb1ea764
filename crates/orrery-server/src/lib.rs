//! # Orrery Server
//!
//! HTTP JSON API over the Orrery planet catalog.
//!
//! The catalog is loaded once before the listener starts and shared
//! read-only by every handler.
//!
//! | Endpoint | Response |
//! |---|---|
//! | `GET /api/all` | every record, normalized |
//! | `GET /api/search?q=&limit=` | name matches, prefix matches first |
//! | `GET /api/top?cat=&limit=` | leaderboard for a category |
//! | `GET /api/random` | one random, preferably habitable, record |
//! | `GET /api/planet?name=` | a single record looked up by name |
//! | `POST /api/contact` | logs the JSON body, returns `{"ok": true}` |
//! | `GET /planets.json` | the raw catalog |
//!
//! ## Example
//!
//! ```rust,ignore
//! use orrery_server::{ServerConfig, serve};
//!
//! let config = ServerConfig::default().with_port(8080);
//! serve(config).await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod state;

pub use config::{Cli, ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::any::Any;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use orrery_catalog::CatalogStore;
use orrery_logging::{REQUEST_ID_HEADER, RequestContext, RequestSpanExt};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, error, info, info_span};

/// Build the application router
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/api/all", get(api::all))
        .route("/api/search", get(api::search))
        .route("/api/top", get(api::top))
        .route("/api/random", get(api::random))
        .route("/api/planet", get(api::planet))
        .route("/api/contact", post(api::contact))
        .route("/planets.json", get(api::raw_catalog))
        .with_state(state);

    with_middleware(routes)
}

/// Panic recovery, request tracing and CORS
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let header = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok());
                    RequestContext::new(request.method().as_str(), request.uri().path())
                        .with_header_id(header)
                        .span()
                })
                .on_request(())
                .on_response(|response: &Response<Body>, latency: Duration, span: &Span| {
                    span.record_response(response.status().as_u16(), latency);
                    info!("Request completed");
                }),
        )
        .layer(CorsLayer::permissive())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    error!(panic = message, "Handler panicked");
    ApiError::Internal("server error".to_string()).into_response()
}

/// Load the catalog, bind the listener and serve until Ctrl-C
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let catalog = info_span!("catalog_load", path = %config.catalog_path.display())
        .in_scope(|| CatalogStore::load_or_empty(&config.catalog_path));
    info!(records = catalog.len(), "Catalog ready");

    let app = router(AppState::new(catalog));

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!(addr = %config.bind, "Orrery listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Orrery stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
