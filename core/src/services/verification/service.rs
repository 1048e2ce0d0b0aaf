//! Phone verification service implementation.

use std::sync::Arc;

use uuid::Uuid;

use sn_shared::utils::phone::{is_valid_phone_number, mask_phone_number};

use crate::domain::entities::profile::Profile;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ProfileRepository, VerificationRecordRepository};

use super::code::generate_sms_code;
use super::config::PhoneVerificationConfig;
use super::digits::join_code_digits;
use super::traits::SmsDispatchQueue;

/// Service orchestrating the phone-number verification workflow
///
/// A phone-change request generates a fresh code, overwrites the profile's
/// single verification record, resets the confirmation flag and enqueues
/// the SMS. A later submission joins the digit inputs, compares them to the
/// stored code and, on success, flips the flag back and retires the code.
pub struct PhoneVerificationService<P, V, Q>
where
    P: ProfileRepository,
    V: VerificationRecordRepository,
    Q: SmsDispatchQueue,
{
    profiles: Arc<P>,
    records: Arc<V>,
    sms_queue: Arc<Q>,
    config: PhoneVerificationConfig,
}

impl<P, V, Q> PhoneVerificationService<P, V, Q>
where
    P: ProfileRepository,
    V: VerificationRecordRepository,
    Q: SmsDispatchQueue,
{
    /// Create a new verification service
    pub fn new(
        profiles: Arc<P>,
        records: Arc<V>,
        sms_queue: Arc<Q>,
        config: PhoneVerificationConfig,
    ) -> Self {
        Self {
            profiles,
            records,
            sms_queue,
            config,
        }
    }

    /// Handle a phone-number change request
    ///
    /// - generates a random verification code and stores it, replacing any
    ///   previous code for this profile
    /// - records the new number and resets `is_phone_number_confirmed`
    /// - enqueues the verification SMS; this method returns before the
    ///   message is sent, and delivery failures never surface here
    ///
    /// Concurrent requests for the same profile race last-write-wins on the
    /// single record; there is no locking or version check.
    pub async fn request_phone_number_change(
        &self,
        profile_id: Uuid,
        site_domain: &str,
        new_phone_number: &str,
    ) -> DomainResult<()> {
        if !is_valid_phone_number(new_phone_number) {
            return Err(DomainError::Validation {
                message: format!("Invalid phone number format: {}", new_phone_number),
            });
        }

        let mut profile = self.load_profile(profile_id).await?;

        let code = generate_sms_code();
        self.records.set_code(profile_id, &code).await?;

        profile.set_phone_number(new_phone_number.to_string());
        profile.set_phone_confirmation_status(false);
        self.profiles.update(profile).await?;

        tracing::info!(
            profile_id = %profile_id,
            phone = %mask_phone_number(new_phone_number),
            event = "phone_change_requested",
            "Generated verification code and queued SMS for phone number change"
        );

        let body = format!("Your {} verification code is: {}", site_domain, code);
        self.sms_queue
            .delay(&body, &self.config.from_number, new_phone_number);

        Ok(())
    }

    /// Return the currently stored verification code for a profile
    ///
    /// Fails with `DomainError::NotFound` when no phone-change request has
    /// been made for this profile (get-or-404 semantics).
    pub async fn stored_code(&self, profile_id: Uuid) -> DomainResult<String> {
        self.records
            .find_by_profile(profile_id)
            .await?
            .map(|record| record.code)
            .ok_or_else(|| DomainError::not_found("VerificationRecord"))
    }

    /// Check a submitted code against the stored one
    ///
    /// Exact string equality; a length mismatch simply compares unequal.
    /// No side effects: confirmation state and the stored record are left
    /// untouched regardless of the verdict. Propagates `NotFound` when no
    /// record exists for the profile.
    pub async fn is_verification_code_valid(
        &self,
        profile_id: Uuid,
        submitted_code: &str,
    ) -> DomainResult<bool> {
        let valid_code = self.stored_code(profile_id).await?;
        Ok(valid_code == submitted_code)
    }

    /// Run the full confirmation workflow against submitted digit inputs
    ///
    /// Joins the validated digits, checks them, and on a match marks the
    /// phone number confirmed and deletes the record so the code cannot be
    /// replayed. Returns the verdict.
    pub async fn confirm_phone_number(
        &self,
        profile_id: Uuid,
        digits: &[String],
    ) -> DomainResult<bool> {
        let submitted_code = join_code_digits(digits)?;

        if !self
            .is_verification_code_valid(profile_id, &submitted_code)
            .await?
        {
            tracing::warn!(
                profile_id = %profile_id,
                event = "phone_confirmation_failed",
                "Submitted verification code did not match"
            );
            return Ok(false);
        }

        self.set_phone_confirmation_status(profile_id, true).await?;
        self.records.delete_by_profile(profile_id).await?;

        tracing::info!(
            profile_id = %profile_id,
            event = "phone_confirmed",
            "Phone number confirmed and verification code retired"
        );

        Ok(true)
    }

    /// Persist the phone confirmation flag on the profile
    ///
    /// Pure state mutation, no validation.
    pub async fn set_phone_confirmation_status(
        &self,
        profile_id: Uuid,
        confirmed: bool,
    ) -> DomainResult<()> {
        let mut profile = self.load_profile(profile_id).await?;
        profile.set_phone_confirmation_status(confirmed);
        self.profiles.update(profile).await?;
        Ok(())
    }

    async fn load_profile(&self, profile_id: Uuid) -> DomainResult<Profile> {
        self.profiles
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile"))
    }
}
