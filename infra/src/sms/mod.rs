//! SMS gateway module
//!
//! Provides the gateway trait for outbound SMS, a Twilio implementation, a
//! mock implementation for development, and the delivery adapter that turns
//! a gateway call into a logged `DeliveryResult`.

pub mod delivery;
pub mod gateway;
pub mod mock_sms;

#[cfg(feature = "twilio-sms")]
pub mod twilio;

pub use delivery::deliver_sms;
pub use gateway::SmsGateway;
pub use mock_sms::MockSmsGateway;

#[cfg(feature = "twilio-sms")]
pub use twilio::TwilioSmsGateway;

use sn_shared::config::SmsConfig;

/// Create an SMS gateway based on configuration
///
/// Unknown providers and failed Twilio initialization fall back to the
/// mock gateway so the rest of the system stays operational.
pub fn create_sms_gateway(config: &SmsConfig) -> Box<dyn SmsGateway> {
    match config.provider.as_str() {
        "mock" => Box::new(MockSmsGateway::new()),
        #[cfg(feature = "twilio-sms")]
        "twilio" => match TwilioSmsGateway::new(config) {
            Ok(gateway) => Box::new(gateway),
            Err(e) => {
                tracing::error!("Failed to initialize Twilio SMS gateway: {}", e);
                tracing::warn!("Falling back to mock SMS gateway");
                Box::new(MockSmsGateway::new())
            }
        },
        other => {
            tracing::warn!("Unknown SMS provider '{}', using mock gateway", other);
            Box::new(MockSmsGateway::new())
        }
    }
}
