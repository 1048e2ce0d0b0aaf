//! Shared utilities and common types for the StayNest server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Utility functions (phone/email validation, masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, EmailConfig, Environment, SmsConfig,
};
pub use utils::{email, phone};
