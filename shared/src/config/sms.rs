//! SMS provider configuration module

use serde::{Deserialize, Serialize};

/// SMS provider configuration
///
/// Credentials for the Twilio REST API plus the sender number used for
/// verification messages. `provider` selects the gateway implementation
/// ("twilio" or "mock").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS provider ("twilio", "mock")
    pub provider: String,

    /// Twilio Account SID
    pub account_sid: String,

    /// Twilio Auth Token
    pub auth_token: String,

    /// Sender phone number (E.164 format)
    pub from_number: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::from("+15005550006"),
        }
    }
}

impl SmsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            from_number: std::env::var("TWILIO_PHONE_NUMBER")
                .unwrap_or_else(|_| "+15005550006".to_string()),
        }
    }
}
