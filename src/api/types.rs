//! API response types
//!
//! All types are framework-agnostic and carry the exact wire shapes: a
//! success envelope with a count and the roster, a uniform error envelope,
//! and the health check body.

use serde::Serialize;

use super::error::ApiError;
use crate::models::FilteredCharacter;

// =============================================================================
// ROSTER RESPONSES
// =============================================================================

/// Success envelope for the JSON roster endpoint
#[derive(Debug, Serialize)]
pub struct CharactersData {
    /// Always "success"
    pub status: &'static str,
    /// Number of records in `data`
    pub count: usize,
    /// The filtered roster, in upstream order
    pub data: Vec<FilteredCharacter>,
}

impl CharactersData {
    /// Wrap a filtered roster in the success envelope
    #[must_use]
    pub fn new(data: Vec<FilteredCharacter>) -> Self {
        Self {
            status: "success",
            count: data.len(),
            data,
        }
    }
}

/// Uniform error envelope for every failure response
#[derive(Debug, Serialize)]
pub struct ErrorData {
    /// Always "error"
    pub status: &'static str,
    /// Human-readable message derived from the failure
    pub message: String,
}

impl From<&ApiError> for ErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            status: "error",
            message: err.message.clone(),
        }
    }
}

/// A rendered CSV download: body plus its attachment filename
#[derive(Debug, Clone)]
pub struct CsvDownload {
    /// Attachment filename with an embedded `YYYYMMDD_HHMMSS` timestamp
    pub filename: String,
    /// CSV text, header row included
    pub body: String,
}

// =============================================================================
// HEALTH CHECK
// =============================================================================

/// Overall or per-check health verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Upstream answered HTTP 200
    Healthy,
    /// Upstream answered non-200 or was unreachable
    Unhealthy,
}

/// Health check response body
#[derive(Debug, Serialize)]
pub struct HealthData {
    /// Overall verdict across all checks
    pub status: HealthStatus,
    /// ISO-8601 timestamp taken at response construction
    pub timestamp: String,
    /// Individual checks
    pub checks: HealthChecks,
}

/// The set of health checks this service performs
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Upstream character API connectivity check
    pub rick_and_morty_api: UpstreamCheck,
}

/// Result of probing the upstream character API
#[derive(Debug, Serialize)]
pub struct UpstreamCheck {
    /// Per-check verdict
    pub status: HealthStatus,
    /// Probe latency in milliseconds, rounded to two decimals; 0 when the
    /// request never completed
    pub latency_ms: f64,
    /// HTTP status the upstream answered with, when it answered at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Network-level failure message, when the request never completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthData {
    /// Build the body from the single upstream check; the overall verdict
    /// is healthy iff every check is
    #[must_use]
    pub fn new(check: UpstreamCheck) -> Self {
        Self {
            status: check.status,
            timestamp: chrono::Local::now().to_rfc3339(),
            checks: HealthChecks {
                rick_and_morty_api: check,
            },
        }
    }

    /// HTTP status code for this body: 200 when healthy, 500 otherwise
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.status {
            HealthStatus::Healthy => 200,
            HealthStatus::Unhealthy => 500,
        }
    }
}
