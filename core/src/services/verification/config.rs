//! Configuration for the phone verification service.

/// Configuration for the phone verification service
#[derive(Debug, Clone)]
pub struct PhoneVerificationConfig {
    /// Sender phone number for verification messages (E.164 format)
    pub from_number: String,
}

impl Default for PhoneVerificationConfig {
    fn default() -> Self {
        Self {
            from_number: String::from("+15005550006"),
        }
    }
}

impl PhoneVerificationConfig {
    pub fn new(from_number: impl Into<String>) -> Self {
        Self {
            from_number: from_number.into(),
        }
    }
}
