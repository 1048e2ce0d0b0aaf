//! Delivery adapter: one gateway attempt, logged and absorbed.

use sn_core::domain::value_objects::DeliveryResult;

use super::gateway::SmsGateway;

/// Send one verification message and report the outcome
///
/// Exactly one provider attempt per call; failures are converted into a
/// `DeliveryResult::failed()` and logged, never propagated. Callers on the
/// request path therefore never see a provider error. The two log lines
/// per attempt (dispatch, then outcome) are the observable record of the
/// delivery.
pub async fn deliver_sms(
    gateway: &dyn SmsGateway,
    body: &str,
    sms_from: &str,
    sms_to: &str,
) -> DeliveryResult {
    tracing::info!(
        "Sending phone number verification message: | Body: {} | To: {} | From {}",
        body,
        sms_to,
        sms_from
    );

    match gateway.send_sms(body, sms_from, sms_to).await {
        Ok(sid) => {
            tracing::info!(
                "Verification message has been sent successfully | To: {} | Twilio SID: {}",
                sms_to,
                sid
            );
            DeliveryResult::delivered(sid)
        }
        Err(e) => {
            tracing::error!(
                "Failed to send verification message | To: {} | Error: {}",
                sms_to,
                e
            );
            DeliveryResult::failed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sms::mock_sms::MockSmsGateway;

    #[tokio::test]
    async fn test_successful_delivery_reports_sid() {
        let gateway = MockSmsGateway::new();

        let result = deliver_sms(&gateway, "Test SMS", "+15005550006", "+14155552671").await;

        assert!(result.is_delivered());
        assert!(result.sid.is_some());
        assert_eq!(gateway.message_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_delivery_is_absorbed() {
        let gateway = MockSmsGateway::failing();

        let result = deliver_sms(&gateway, "Test SMS", "+15005550006", "+14155552671").await;

        assert!(!result.is_delivered());
        assert!(result.sid.is_none());
    }
}
