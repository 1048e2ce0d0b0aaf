//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `cache` - Redis configuration (direct and Sentinel deployments)
//! - `database` - Database connection and pool configuration
//! - `email` - SMTP delivery configuration
//! - `environment` - Environment detection
//! - `sms` - SMS provider (Twilio) configuration

pub mod cache;
pub mod database;
pub mod email;
pub mod environment;
pub mod sms;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;
pub use sms::SmsConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Redis cache configuration
    pub cache: CacheConfig,

    /// SMS provider configuration
    pub sms: SmsConfig,

    /// SMTP delivery configuration
    pub email: EmailConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            sms: SmsConfig::default(),
            email: EmailConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the full configuration from environment variables
    ///
    /// Loads `.env` first if one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        Self {
            environment,
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(environment),
            sms: SmsConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.environment.is_development());
        assert_eq!(config.database.max_connections, 10);
        assert!(config.cache.sentinel_hosts.is_empty());
    }
}
