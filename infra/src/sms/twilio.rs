//! Twilio SMS gateway implementation.

use async_trait::async_trait;
use tracing::info;
use twilio::{Client, OutboundMessage};

use sn_shared::config::SmsConfig;
use sn_shared::utils::phone::mask_phone_number;

use crate::sms::gateway::SmsGateway;
use crate::InfrastructureError;

/// Twilio-backed SMS gateway
///
/// The REST client is built from injected credentials at construction time;
/// there is no process-global Twilio state.
pub struct TwilioSmsGateway {
    client: Client,
}

impl TwilioSmsGateway {
    /// Create a new Twilio gateway from SMS configuration
    pub fn new(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "Twilio credentials are not configured".to_string(),
            ));
        }

        if !config.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "Twilio sender number must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS gateway initialized"
        );

        Ok(Self {
            client: Client::new(&config.account_sid, &config.auth_token),
        })
    }
}

#[async_trait]
impl SmsGateway for TwilioSmsGateway {
    async fn send_sms(
        &self,
        body: &str,
        sms_from: &str,
        sms_to: &str,
    ) -> Result<String, InfrastructureError> {
        let message = OutboundMessage::new(sms_from, sms_to, body);

        match self.client.send_message(message).await {
            Ok(response) => Ok(response.sid),
            Err(e) => Err(InfrastructureError::Sms(e.to_string())),
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
