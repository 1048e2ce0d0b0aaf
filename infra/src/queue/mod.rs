//! Tokio-backed task queues.
//!
//! These bridge the core dispatch seams (`SmsDispatchQueue`,
//! `EmailDispatchQueue`) to the gateway implementations. An enqueue spawns
//! a worker task and returns immediately; nothing on the caller's path
//! awaits the provider call, and worker failures are logged, not raised.
//! There is no ordering guarantee between the enqueue returning and the
//! message leaving the system.

use std::sync::Arc;

use sn_core::domain::value_objects::EmailMessage;
use sn_core::services::mailing::EmailDispatchQueue;
use sn_core::services::verification::SmsDispatchQueue;
use sn_shared::utils::phone::mask_phone_number;

use crate::mail::gateway::EmailGateway;
use crate::sms::delivery::deliver_sms;
use crate::sms::gateway::SmsGateway;

/// SMS task queue dispatching through an injected gateway
pub struct SmsTaskQueue {
    gateway: Arc<dyn SmsGateway>,
}

impl SmsTaskQueue {
    pub fn new(gateway: Arc<dyn SmsGateway>) -> Self {
        Self { gateway }
    }
}

impl SmsDispatchQueue for SmsTaskQueue {
    fn delay(&self, body: &str, sms_from: &str, sms_to: &str) {
        let gateway = Arc::clone(&self.gateway);
        let body = body.to_string();
        let sms_from = sms_from.to_string();
        let sms_to = sms_to.to_string();

        tokio::spawn(async move {
            let result = deliver_sms(gateway.as_ref(), &body, &sms_from, &sms_to).await;
            tracing::debug!(
                status = ?result.status,
                to = %mask_phone_number(&sms_to),
                "SMS dispatch task finished"
            );
        });
    }
}

/// Email task queue dispatching through an injected gateway
pub struct EmailTaskQueue {
    gateway: Arc<dyn EmailGateway>,
}

impl EmailTaskQueue {
    pub fn new(gateway: Arc<dyn EmailGateway>) -> Self {
        Self { gateway }
    }
}

impl EmailDispatchQueue for EmailTaskQueue {
    fn delay(&self, message: EmailMessage) {
        let gateway = Arc::clone(&self.gateway);

        tokio::spawn(async move {
            match gateway.send_email(&message).await {
                Ok(()) => {
                    tracing::info!(to = %message.to, subject = %message.subject, "Email sent");
                }
                Err(e) => {
                    tracing::error!(to = %message.to, error = %e, "Failed to send email");
                }
            }
        });
    }
}
