//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_MAX_AGE;

/// Parses a comma-separated endpoint list, skipping blank entries.
fn parse_endpoints(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|endpoint| !endpoint.is_empty())
        .map(str::to_string)
        .collect()
}

/// Endpoints cached when `CACHED_ENDPOINTS` is not set.
fn default_cached_endpoints() -> Vec<String> {
    vec!["/project".to_string(), "/projects".to_string()]
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Path fragments whose responses are cached
    pub cached_endpoints: Vec<String>,
    /// Default cache TTL in seconds for requests without `max-age`
    pub cache_max_age: u64,
    /// Background sweep task interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CACHED_ENDPOINTS` - Comma-separated cached path fragments
    ///   (default: "/project,/projects")
    /// - `CACHE_MAX_AGE` - Default cache TTL in seconds (default: 60)
    /// - `CACHE_SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            cached_endpoints: env::var("CACHED_ENDPOINTS")
                .ok()
                .map(|v| parse_endpoints(&v))
                .filter(|endpoints| !endpoints.is_empty())
                .unwrap_or_else(default_cached_endpoints),
            cache_max_age: env::var("CACHE_MAX_AGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_AGE),
            sweep_interval: env::var("CACHE_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            cached_endpoints: default_cached_endpoints(),
            cache_max_age: DEFAULT_MAX_AGE,
            sweep_interval: 60,
        }
    }
}
