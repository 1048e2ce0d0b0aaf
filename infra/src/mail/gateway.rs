//! Email gateway interface.

use async_trait::async_trait;

use sn_core::domain::value_objects::EmailMessage;

use crate::InfrastructureError;

/// Gateway trait for sending one email through an external transport
#[async_trait]
pub trait EmailGateway: Send + Sync {
    /// Send an email message
    async fn send_email(&self, message: &EmailMessage) -> Result<(), InfrastructureError>;

    /// Name of the mail backend (e.g. "Smtp", "Mock")
    fn backend_name(&self) -> &str;
}
