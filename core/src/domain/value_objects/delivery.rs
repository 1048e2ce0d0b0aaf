//! Outcome of a single outbound message dispatch attempt.

use serde::{Deserialize, Serialize};

/// Terminal status of a dispatch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// The provider accepted the message
    Delivered,
    /// The provider rejected the message or the call failed
    Failed,
}

/// Outcome of one dispatch attempt
///
/// Transient: never persisted, only used for logging and telemetry at the
/// call site. The provider message id is present only on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryResult {
    /// Terminal status of the attempt
    pub status: DeliveryStatus,

    /// Provider message id (Twilio SID), present only when delivered
    pub sid: Option<String>,
}

impl DeliveryResult {
    /// A successful dispatch carrying the provider message id
    pub fn delivered(sid: impl Into<String>) -> Self {
        Self {
            status: DeliveryStatus::Delivered,
            sid: Some(sid.into()),
        }
    }

    /// A failed dispatch; the error itself is logged, not carried
    pub fn failed() -> Self {
        Self {
            status: DeliveryStatus::Failed,
            sid: None,
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.status == DeliveryStatus::Delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivered_carries_sid() {
        let result = DeliveryResult::delivered("SM87105da94bff44b999e4e6eb90d8eb6a");

        assert!(result.is_delivered());
        assert_eq!(
            result.sid.as_deref(),
            Some("SM87105da94bff44b999e4e6eb90d8eb6a")
        );
    }

    #[test]
    fn test_failed_has_no_sid() {
        let result = DeliveryResult::failed();

        assert!(!result.is_delivered());
        assert!(result.sid.is_none());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::Delivered).unwrap(),
            "\"delivered\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::Failed).unwrap(),
            "\"failed\""
        );
    }
}
