//! Verification record entity for SMS phone-number confirmation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single outstanding verification attempt for a profile
///
/// At most one record exists per profile at any time. A new phone-change
/// request overwrites the code in place; no history is retained. The record
/// stays live until it is overwritten or explicitly deleted after a
/// successful confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Profile this record belongs to (one-to-one)
    pub profile_id: Uuid,

    /// The current verification code (fixed-width decimal digits)
    pub code: String,

    /// Timestamp when the record was first created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code was last replaced
    pub updated_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Creates a record holding the given code
    pub fn new(profile_id: Uuid, code: String) -> Self {
        let now = Utc::now();
        Self {
            profile_id,
            code,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the stored code, discarding the previous one
    pub fn set_code(&mut self, code: String) {
        self.code = code;
        self.updated_at = Utc::now();
    }
}
