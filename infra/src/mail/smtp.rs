//! SMTP email gateway implementation (lettre).

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use sn_core::domain::value_objects::EmailMessage;
use sn_shared::config::EmailConfig;

use crate::mail::gateway::EmailGateway;
use crate::InfrastructureError;

/// SMTP-backed email gateway
pub struct SmtpEmailGateway {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: EmailConfig,
}

impl SmtpEmailGateway {
    /// Create a new SMTP gateway from email configuration
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| {
                InfrastructureError::Config(format!("Invalid SMTP relay '{}': {}", config.smtp_host, e))
            })?
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        info!(host = %config.smtp_host, "SMTP email gateway initialized");

        Ok(Self { transport, config })
    }

    fn sender_mailbox(&self) -> Result<Mailbox, InfrastructureError> {
        format!("{} <{}>", self.config.sender_name, self.config.sender_email)
            .parse()
            .map_err(|e| {
                InfrastructureError::Config(format!("Invalid sender address: {}", e))
            })
    }
}

#[async_trait]
impl EmailGateway for SmtpEmailGateway {
    async fn send_email(&self, message: &EmailMessage) -> Result<(), InfrastructureError> {
        let to: Mailbox = message.to.parse().map_err(|e| {
            InfrastructureError::Mail(format!("Invalid recipient address '{}': {}", message.to, e))
        })?;

        let email = Message::builder()
            .from(self.sender_mailbox()?)
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| InfrastructureError::Mail(format!("Failed to build message: {}", e)))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| InfrastructureError::Mail(e.to_string()))?;

        Ok(())
    }

    fn backend_name(&self) -> &str {
        "Smtp"
    }
}
