//! Per-request correlation
//!
//! Every HTTP request gets a [`RequestContext`] whose UUID is attached to
//! the request span, so all log lines emitted while serving the request
//! can be grouped by `request_id`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::field;
use uuid::Uuid;

/// Header clients may use to supply their own request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation data for a single request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Unique ID for this request
    pub request_id: Uuid,
    /// HTTP method
    pub method: String,
    /// Request path, without the query string
    pub path: String,
}

impl RequestContext {
    /// Create a context with a fresh request ID
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            method: method.into(),
            path: path.into(),
        }
    }

    /// Reuse a client-supplied request ID if it is a valid UUID
    pub fn with_header_id(mut self, header: Option<&str>) -> Self {
        if let Some(id) = header.and_then(|h| Uuid::parse_str(h.trim()).ok()) {
            self.request_id = id;
        }
        self
    }

    /// Build the span that wraps this request
    ///
    /// `status` and `latency_ms` start empty and are filled in by
    /// [`RequestSpanExt::record_response`].
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!(
            "http_request",
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            status = field::Empty,
            latency_ms = field::Empty,
        )
    }
}

/// Helper trait to record response details on a request span
pub trait RequestSpanExt {
    /// Record the response status and latency
    fn record_response(&self, status: u16, latency: Duration);
}

impl RequestSpanExt for tracing::Span {
    fn record_response(&self, status: u16, latency: Duration) {
        self.record(fields::STATUS, status);
        self.record(fields::LATENCY_MS, latency.as_millis() as u64);
    }
}

/// Standard field names for request spans
pub mod fields {
    pub const STATUS: &str = "status";
    pub const LATENCY_MS: &str = "latency_ms";
}
