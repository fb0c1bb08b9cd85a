//! Upstream client - walks the paginated character collection
//!
//! The client fetches every page of the collection by following `info.next`
//! until it is null, then applies the roster filter in a single pass. Each
//! call is independent and blocking; nothing is cached or retried, and a
//! failure on any page discards everything accumulated for that call.
//!
//! # Examples
//!
//! ```no_run
//! use earthling::config::UpstreamConfig;
//! use earthling::upstream::UpstreamClient;
//!
//! let client = UpstreamClient::new(UpstreamConfig::default()).unwrap();
//! let roster = client.fetch_filtered().unwrap();
//! println!("{} matching characters", roster.len());
//! ```

use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use crate::config::UpstreamConfig;
use crate::models::{Character, FilteredCharacter, PageEnvelope};

/// Errors from the upstream character API
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, timeout, or DNS failure
    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body is not the expected page envelope
    #[error("upstream response from {url} is not a valid page: {source}")]
    Parse {
        /// URL whose body failed to parse
        url: String,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// Upstream answered with a non-success status
    #[error("upstream returned HTTP {0}")]
    Http(u16),

    /// Pagination exceeded the configured safety cutoff
    #[error("pagination did not terminate within {0} pages")]
    PageLimit(u32),
}

/// Result of a single health probe request
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    /// HTTP status code the upstream answered with
    pub status_code: u16,
    /// Wall-clock latency in milliseconds, rounded to two decimals
    pub latency_ms: f64,
}

/// Blocking client for the paginated character API
#[derive(Debug)]
pub struct UpstreamClient {
    http: reqwest::blocking::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Build a client from upstream settings
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    /// Walk the collection to completion, returning every record in
    /// page-then-within-page order
    pub fn fetch_all(&self) -> Result<Vec<Character>, UpstreamError> {
        let mut all = Vec::new();
        let mut next = Some(self.config.base_url.clone());
        let mut pages: u32 = 0;

        while let Some(url) = next {
            if let Some(max) = self.config.max_pages {
                if pages >= max {
                    return Err(UpstreamError::PageLimit(max));
                }
            }
            let page = self.fetch_page(&url)?;
            pages += 1;
            debug!("page {pages}: {} records from {url}", page.results.len());
            all.extend(page.results);
            next = page.info.next;
        }

        debug!("pagination complete: {pages} page(s), {} records", all.len());
        Ok(all)
    }

    /// Fetch every page, then keep and project the roster matches.
    ///
    /// Output order equals order of encounter; re-running against unchanged
    /// upstream data yields an identical sequence.
    pub fn fetch_filtered(&self) -> Result<Vec<FilteredCharacter>, UpstreamError> {
        let all = self.fetch_all()?;
        Ok(all
            .iter()
            .filter(|c| FilteredCharacter::matches(c))
            .map(FilteredCharacter::project)
            .collect())
    }

    /// Issue a single GET against the probe endpoint, timing the exchange.
    ///
    /// Returns `Ok` for any HTTP completion (the caller decides what a
    /// non-200 means); `Err` only for network-level failures.
    pub fn probe(&self) -> Result<Probe, UpstreamError> {
        let started = Instant::now();
        let response = self.http.get(&self.config.probe_url).send()?;
        let latency_ms = round2(started.elapsed().as_secs_f64() * 1000.0);

        Ok(Probe {
            status_code: response.status().as_u16(),
            latency_ms,
        })
    }

    fn fetch_page(&self, url: &str) -> Result<PageEnvelope, UpstreamError> {
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http(status.as_u16()));
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|source| UpstreamError::Parse {
            url: url.to_string(),
            source,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
