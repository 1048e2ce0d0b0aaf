//! SMTP delivery configuration module

use serde::{Deserialize, Serialize};

/// SMTP delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Mail delivery backend ("smtp", "mock")
    pub backend: String,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP username
    pub smtp_username: String,

    /// SMTP password
    pub smtp_password: String,

    /// Sender address used in the From header
    pub sender_email: String,

    /// Display name used in the From header
    pub sender_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            backend: String::from("mock"),
            smtp_host: String::from("localhost"),
            smtp_username: String::new(),
            smtp_password: String::new(),
            sender_email: String::from("noreply@staynest.example"),
            sender_name: String::from("StayNest"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            backend: std::env::var("EMAIL_BACKEND").unwrap_or_else(|_| "mock".to_string()),
            smtp_host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            smtp_username: std::env::var("SMTP_USERNAME").unwrap_or_default(),
            smtp_password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            sender_email: std::env::var("EMAIL_SENDER")
                .unwrap_or_else(|_| "noreply@staynest.example".to_string()),
            sender_name: std::env::var("EMAIL_SENDER_NAME")
                .unwrap_or_else(|_| "StayNest".to_string()),
        }
    }
}
