// SPDX-License-Identifier: Apache-2.0

use std::env;

pub(crate) fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

pub(crate) fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

pub(crate) fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

/// Process-level settings read once at startup. The store connection string
/// only ever comes from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub store_uri: String,
    pub store_database: String,
    pub store_collection: String,
    pub log_json: bool,
    pub shutdown_drain_ms: u64,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        let store_uri = env::var("BESTIARY_STORE_URI")
            .map_err(|_| "BESTIARY_STORE_URI is required".to_string())?;
        if store_uri.trim().is_empty() {
            return Err("BESTIARY_STORE_URI is required".to_string());
        }
        Ok(Self {
            bind: env::var("BESTIARY_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            store_uri,
            store_database: env::var("BESTIARY_STORE_DB")
                .unwrap_or_else(|_| "bestiary".to_string()),
            store_collection: env::var("BESTIARY_STORE_COLLECTION")
                .unwrap_or_else(|_| "creatures".to_string()),
            log_json: env_bool("BESTIARY_LOG_JSON", true),
            shutdown_drain_ms: env_u64("BESTIARY_SHUTDOWN_DRAIN_MS", 5000),
        })
    }
}

/// Request-validation limits for the HTTP surface.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    pub default_top_n: usize,
    pub max_top_n: usize,
    pub default_histogram_bins: usize,
    pub max_histogram_bins: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            default_top_n: 10,
            max_top_n: 100,
            default_histogram_bins: 30,
            max_histogram_bins: 200,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_body_bytes: env_usize("BESTIARY_MAX_BODY_BYTES", 16 * 1024),
            default_top_n: env_usize("BESTIARY_DEFAULT_TOP_N", 10),
            max_top_n: env_usize("BESTIARY_MAX_TOP_N", 100),
            default_histogram_bins: env_usize("BESTIARY_DEFAULT_HISTOGRAM_BINS", 30),
            max_histogram_bins: env_usize("BESTIARY_MAX_HISTOGRAM_BINS", 200),
        }
    }
}

pub fn validate_startup_config_contract(api: &ApiConfig) -> Result<(), String> {
    if api.max_body_bytes == 0 {
        return Err("api size limits must be > 0".to_string());
    }
    if api.max_top_n == 0 || api.default_top_n > api.max_top_n {
        return Err("top-n contract requires 0 < default <= max".to_string());
    }
    if api.default_histogram_bins == 0 || api.default_histogram_bins > api.max_histogram_bins {
        return Err("histogram bins contract requires 0 < default <= max".to_string());
    }
    Ok(())
}
