//! Verification record repository trait.
//!
//! Invariant: at most one record exists per profile at any time. `set_code`
//! carries get-or-create semantics; looking up a missing record is an
//! `Ok(None)` here and becomes `DomainError::NotFound` at the service
//! boundary (get-or-404 semantics).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;

/// Repository contract for the per-profile verification record
#[async_trait]
pub trait VerificationRecordRepository: Send + Sync {
    /// Find the record for a profile, if one exists
    async fn find_by_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<VerificationRecord>, DomainError>;

    /// Insert or update the single record for a profile
    ///
    /// Overwrites any prior code with no retention of history. Idempotent
    /// per call.
    async fn set_code(
        &self,
        profile_id: Uuid,
        code: &str,
    ) -> Result<VerificationRecord, DomainError>;

    /// Remove the record for a profile
    ///
    /// # Returns
    /// * `Ok(true)` - a record existed and was removed
    /// * `Ok(false)` - no record existed
    async fn delete_by_profile(&self, profile_id: Uuid) -> Result<bool, DomainError>;
}
