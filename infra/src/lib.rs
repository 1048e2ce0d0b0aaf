//! # Infrastructure Layer
//!
//! Concrete implementations behind the core repository and dispatch seams:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Cache**: Redis client (direct or Sentinel) and a Redis-backed
//!   verification record store
//! - **SMS**: Twilio gateway, mock gateway, and the delivery adapter
//! - **Mail**: SMTP (lettre) and mock gateways
//! - **Queue**: Tokio-backed fire-and-forget task queues bridging the core
//!   dispatch traits to the gateways
//!
//! ## Features
//!
//! - `mysql`: MySQL database support (default)
//! - `redis-cache`: Redis caching support (default)
//! - `twilio-sms`: Twilio SMS gateway (default)
//! - `smtp-mail`: SMTP mail gateway (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis client and stores
pub mod cache;

/// Mail gateway module
pub mod mail;

/// Task queue module - asynchronous dispatch workers
pub mod queue;

/// SMS gateway module
pub mod sms;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS provider error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// Mail delivery error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
