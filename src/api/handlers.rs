//! Pure API handlers
//!
//! These handlers contain the fetch-and-filter logic and are HTTP-agnostic.
//! They take an upstream client and return `Result<T, ApiError>` (the
//! health check returns its body unconditionally and carries its own
//! status code).

use chrono::Local;

use super::error::ApiError;
use super::types::{CharactersData, CsvDownload, HealthData, HealthStatus, UpstreamCheck};
use crate::export;
use crate::upstream::UpstreamClient;

/// Fetch, filter, and wrap the roster as JSON response data
pub fn characters(client: &UpstreamClient) -> Result<CharactersData, ApiError> {
    let roster = client.fetch_filtered()?;
    Ok(CharactersData::new(roster))
}

/// Fetch, filter, and render the roster as a timestamped CSV download
pub fn characters_csv(client: &UpstreamClient) -> Result<CsvDownload, ApiError> {
    let roster = client.fetch_filtered()?;
    let body = export::to_csv_string(&roster)?;
    let filename = format!("characters_{}.csv", Local::now().format("%Y%m%d_%H%M%S"));

    Ok(CsvDownload { filename, body })
}

/// Probe upstream connectivity and build the health body.
///
/// An HTTP completion with status 200 is healthy; any other completion is
/// unhealthy with the observed status code; a network-level failure is
/// unhealthy with the error message and zero latency.
#[must_use]
pub fn healthcheck(client: &UpstreamClient) -> HealthData {
    let check = match client.probe() {
        Ok(probe) => UpstreamCheck {
            status: if probe.status_code == 200 {
                HealthStatus::Healthy
            } else {
                HealthStatus::Unhealthy
            },
            latency_ms: probe.latency_ms,
            status_code: Some(probe.status_code),
            error: None,
        },
        Err(e) => UpstreamCheck {
            status: HealthStatus::Unhealthy,
            latency_ms: 0.0,
            status_code: None,
            error: Some(e.to_string()),
        },
    };

    HealthData::new(check)
}
