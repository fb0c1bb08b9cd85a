//! Configuration
//!
//! Upstream URLs and server settings, loaded from `earthling.toml` in the
//! working directory when present, with built-in defaults otherwise. The
//! upstream base URL lives here (not in a module-level constant) so tests
//! and deployments can point the client at a different collection.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "earthling.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream character API settings
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Upstream character API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// First page of the paginated character collection
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Single-record endpoint used by the health probe
    #[serde(default = "default_probe_url")]
    pub probe_url: String,
    /// Per-request timeout in seconds; `None` keeps the client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Pagination safety cutoff; `None` walks until upstream stops
    #[serde(default)]
    pub max_pages: Option<u32>,
}

fn default_base_url() -> String {
    "https://rickandmortyapi.com/api/character".to_string()
}

fn default_probe_url() -> String {
    "https://rickandmortyapi.com/api/character/1".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            probe_url: default_probe_url(),
            timeout_secs: None,
            max_pages: None,
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the server binds on all interfaces
    #[serde(default = "default_port")]
    pub port: u16,
}

const fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    /// Load config from `earthling.toml` in the working directory, or
    /// defaults if the file is missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
