//! Mock email gateway for development and testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::warn;

use sn_core::domain::value_objects::EmailMessage;

use crate::mail::gateway::EmailGateway;
use crate::InfrastructureError;

/// Mock email gateway that stores sent messages instead of delivering them
#[derive(Clone)]
pub struct MockEmailGateway {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    simulate_failure: bool,
}

impl MockEmailGateway {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: false,
        }
    }

    /// A gateway that rejects every send
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::new()
        }
    }

    /// Copies of all accepted messages
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockEmailGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailGateway for MockEmailGateway {
    async fn send_email(&self, message: &EmailMessage) -> Result<(), InfrastructureError> {
        if self.simulate_failure {
            warn!("Mock email gateway simulating failure");
            return Err(InfrastructureError::Mail(
                "Simulated mail delivery failure".to_string(),
            ));
        }

        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_stores_messages() {
        let gateway = MockEmailGateway::new();
        let message = EmailMessage::new("guest@example.com", "Hi", "Hello there");

        gateway.send_email(&message).await.unwrap();

        let sent = gateway.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Hi");
    }

    #[tokio::test]
    async fn test_mock_simulated_failure() {
        let gateway = MockEmailGateway::failing();
        let message = EmailMessage::new("guest@example.com", "Hi", "Hello there");

        assert!(gateway.send_email(&message).await.is_err());
        assert!(gateway.sent_messages().is_empty());
    }
}
