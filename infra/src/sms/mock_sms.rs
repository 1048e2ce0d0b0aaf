//! Mock SMS gateway for development and testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::warn;
use uuid::Uuid;

use crate::sms::gateway::SmsGateway;
use crate::InfrastructureError;

/// A message accepted by the mock gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSentSms {
    pub body: String,
    pub sms_from: String,
    pub sms_to: String,
}

/// Mock SMS gateway
///
/// Accepts every message (unless failure simulation is on), hands back a
/// generated SID, and keeps what it saw for assertions.
#[derive(Clone)]
pub struct MockSmsGateway {
    sent: Arc<Mutex<Vec<MockSentSms>>>,
    message_count: Arc<AtomicU64>,
    simulate_failure: bool,
}

impl MockSmsGateway {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            message_count: Arc::new(AtomicU64::new(0)),
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

    /// Number of messages accepted so far
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Copies of all accepted messages
    pub fn sent_messages(&self) -> Vec<MockSentSms> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockSmsGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsGateway for MockSmsGateway {
    async fn send_sms(
        &self,
        body: &str,
        sms_from: &str,
        sms_to: &str,
    ) -> Result<String, InfrastructureError> {
        if self.simulate_failure {
            warn!("Mock SMS gateway simulating failure");
            return Err(InfrastructureError::Sms(format!(
                "Unable to create record: The 'To' number {} is not a valid phone number.",
                sms_to
            )));
        }

        self.sent.lock().unwrap().push(MockSentSms {
            body: body.to_string(),
            sms_from: sms_from.to_string(),
            sms_to: sms_to.to_string(),
        });
        self.message_count.fetch_add(1, Ordering::SeqCst);

        Ok(format!("mock_{}", Uuid::new_v4()))
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
