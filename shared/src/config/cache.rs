//! Cache configuration module
//!
//! Covers both direct Redis deployments (development) and Sentinel-managed
//! clusters (production). The mode is chosen once at startup from this
//! config; the resulting client is constructed explicitly and injected,
//! never looked up from process-global state.

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL (direct mode)
    pub url: String,

    /// Sentinel host names; non-empty switches the client to Sentinel mode
    #[serde(default)]
    pub sentinel_hosts: Vec<String>,

    /// Sentinel port (conventionally 26379)
    #[serde(default = "default_sentinel_port")]
    pub sentinel_port: u16,

    /// Name of the Sentinel-monitored master
    #[serde(default)]
    pub master_name: String,

    /// Password for the Sentinel-managed master, if any
    #[serde(default)]
    pub master_password: Option<String>,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Redis database number (0-15)
    #[serde(default)]
    pub database: u8,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            sentinel_hosts: Vec::new(),
            sentinel_port: default_sentinel_port(),
            master_name: String::new(),
            master_password: None,
            connection_timeout: 5,
            database: 0,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    ///
    /// Sentinel hosts are only honored in production; development and
    /// staging always use the direct URL.
    pub fn from_env(environment: Environment) -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let sentinel_hosts = if environment.is_production() {
            std::env::var("REDIS_SENTINEL_HOSTS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|h| !h.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        Self {
            url,
            sentinel_hosts,
            master_name: std::env::var("REDIS_MASTER_NAME").unwrap_or_default(),
            master_password: std::env::var("REDIS_MASTER_PASSWORD").ok(),
            ..Default::default()
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Whether the client should resolve the master through Sentinel
    pub fn uses_sentinel(&self) -> bool {
        !self.sentinel_hosts.is_empty()
    }
}

fn default_sentinel_port() -> u16 {
    26379
}
