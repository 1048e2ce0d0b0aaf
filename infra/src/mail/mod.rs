//! Mail gateway module
//!
//! SMTP delivery for account notifications, mirroring the SMS module:
//! trait seam, production implementation, mock, factory.

pub mod gateway;
pub mod mock_mail;

#[cfg(feature = "smtp-mail")]
pub mod smtp;

pub use gateway::EmailGateway;
pub use mock_mail::MockEmailGateway;

#[cfg(feature = "smtp-mail")]
pub use smtp::SmtpEmailGateway;

use sn_shared::config::EmailConfig;

/// Create an email gateway based on configuration
pub fn create_email_gateway(config: &EmailConfig) -> Box<dyn EmailGateway> {
    match config.backend.as_str() {
        "mock" => Box::new(MockEmailGateway::new()),
        #[cfg(feature = "smtp-mail")]
        "smtp" => match SmtpEmailGateway::new(config.clone()) {
            Ok(gateway) => Box::new(gateway),
            Err(e) => {
                tracing::error!("Failed to initialize SMTP gateway: {}", e);
                tracing::warn!("Falling back to mock email gateway");
                Box::new(MockEmailGateway::new())
            }
        },
        other => {
            tracing::warn!("Unknown email backend '{}', using mock gateway", other);
            Box::new(MockEmailGateway::new())
        }
    }
}
