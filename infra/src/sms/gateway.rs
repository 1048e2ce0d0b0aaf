//! SMS gateway interface.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Gateway trait for sending one SMS through an external provider
///
/// Exactly one provider call per invocation: retry and backoff are left to
/// an outer queue policy, which this flow deliberately does not define.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Send an SMS message
    ///
    /// # Arguments
    ///
    /// * `body` - message content
    /// * `sms_from` - sender number (E.164 format)
    /// * `sms_to` - recipient number (E.164 format)
    ///
    /// # Returns
    ///
    /// * `Ok(sid)` - provider message id
    /// * `Err(InfrastructureError)` - provider rejected the send
    async fn send_sms(
        &self,
        body: &str,
        sms_from: &str,
        sms_to: &str,
    ) -> Result<String, InfrastructureError>;

    /// Name of the SMS provider (e.g. "Twilio", "Mock")
    fn provider_name(&self) -> &str;
}
