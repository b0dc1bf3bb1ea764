//! API error responses
//!
//! Every failure leaves the server as a JSON object `{"error": "..."}` with
//! a matching status code. Unparseable catalog values never reach this
//! point; they normalize to `null` instead.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use orrery_catalog::CatalogError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Message returned when a query needs at least one record
pub const NO_PLANETS_MESSAGE: &str = "no planets available";

/// Errors returned by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// The catalog has no records to serve
    #[error("{0}")]
    NoData(String),

    /// A named resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Malformed request parameters or body
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected failure while handling the request
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoData(_) | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Empty => ApiError::NoData(NO_PLANETS_MESSAGE.to_string()),
            other => {
                error!(error = %other, "Catalog error while serving request");
                ApiError::Internal("server error".to_string())
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
