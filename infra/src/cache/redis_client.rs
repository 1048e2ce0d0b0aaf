//! Redis cache client.
//!
//! The client is constructed exactly once at process startup from
//! `CacheConfig` and injected into whatever needs it. Direct-vs-Sentinel is
//! a config decision made here, not an ambient environment lookup: in
//! Sentinel mode the master address is resolved through the configured
//! sentinels before the working connection is opened.

use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use tracing::{info, warn};

use sn_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Async Redis client with a multiplexed connection
#[derive(Clone)]
pub struct RedisClient {
    connection: MultiplexedConnection,
}

impl RedisClient {
    /// Connect according to the configuration
    ///
    /// Sentinel mode is selected when `config.sentinel_hosts` is non-empty;
    /// otherwise the direct URL is used.
    pub async fn connect(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let url = if config.uses_sentinel() {
            let master_url = Self::resolve_master_url(config).await?;
            info!(master = %config.master_name, "Resolved Redis master through Sentinel");
            master_url
        } else {
            config.url.clone()
        };

        let client = Client::open(url.as_str()).map_err(|e| {
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;
        let connection = client.get_multiplexed_async_connection().await?;

        info!("Redis client connected");

        Ok(Self { connection })
    }

    /// Resolve the current master address from the configured sentinels
    ///
    /// Sentinels are tried in order; the first one that answers
    /// `SENTINEL get-master-addr-by-name` wins.
    async fn resolve_master_url(config: &CacheConfig) -> Result<String, InfrastructureError> {
        for host in &config.sentinel_hosts {
            let sentinel_url = format!("redis://{}:{}", host, config.sentinel_port);

            let client = match Client::open(sentinel_url.as_str()) {
                Ok(client) => client,
                Err(e) => {
                    warn!(sentinel = %host, error = %e, "Skipping sentinel with invalid address");
                    continue;
                }
            };

            let mut conn = match client.get_multiplexed_async_connection().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!(sentinel = %host, error = %e, "Sentinel unreachable");
                    continue;
                }
            };

            let addr: Result<Vec<String>, _> = redis::cmd("SENTINEL")
                .arg("get-master-addr-by-name")
                .arg(&config.master_name)
                .query_async(&mut conn)
                .await;

            match addr {
                Ok(addr) if addr.len() == 2 => {
                    let auth = config
                        .master_password
                        .as_deref()
                        .map(|password| format!(":{}@", password))
                        .unwrap_or_default();
                    return Ok(format!(
                        "redis://{}{}:{}/{}",
                        auth, addr[0], addr[1], config.database
                    ));
                }
                Ok(_) => {
                    warn!(sentinel = %host, master = %config.master_name, "Sentinel does not know the master");
                }
                Err(e) => {
                    warn!(sentinel = %host, error = %e, "Sentinel query failed");
                }
            }
        }

        Err(InfrastructureError::Config(format!(
            "No sentinel returned an address for master '{}'",
            config.master_name
        )))
    }

    /// Set a key to a value with no expiry
    pub async fn set(&self, key: &str, value: &str) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    /// Set a key to a value that expires after `ttl_seconds`
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();
        let _: () = conn.set_ex(key, value, ttl_seconds).await?;
        Ok(())
    }

    /// Get the value of a key, if present
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    /// Delete a key
    ///
    /// # Returns
    /// * `Ok(true)` - the key existed and was removed
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        let removed: i64 = conn.del(key).await?;
        Ok(removed > 0)
    }
}
