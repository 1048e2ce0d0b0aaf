//! Account service implementation.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::profile::Profile;
use crate::domain::value_objects::EmailMessage;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ProfileRepository;
use crate::services::mailing::EmailDispatchQueue;

/// Service for account lifecycle notifications and email confirmation state
pub struct AccountService<P, Q>
where
    P: ProfileRepository,
    Q: EmailDispatchQueue,
{
    profiles: Arc<P>,
    email_queue: Arc<Q>,
}

impl<P, Q> AccountService<P, Q>
where
    P: ProfileRepository,
    Q: EmailDispatchQueue,
{
    pub fn new(profiles: Arc<P>, email_queue: Arc<Q>) -> Self {
        Self {
            profiles,
            email_queue,
        }
    }

    /// Queue the greeting email sent right after signup
    ///
    /// The body is plain text; rendered HTML alternatives are a concern of
    /// the (external) template layer.
    pub fn send_greeting_email(&self, profile: &Profile, site_domain: &str) {
        let message = EmailMessage::new(
            profile.email.clone(),
            "Thanks for signing up",
            format!(
                "Thanks for signing up. Start planning your next stay at https://{}.",
                site_domain
            ),
        );

        tracing::info!(
            profile_id = %profile.id,
            event = "greeting_email_queued",
            "Queued greeting email"
        );

        self.email_queue.delay(message);
    }

    /// Persist the email confirmation flag on the profile
    ///
    /// Pure state mutation, no validation.
    pub async fn set_email_confirmation_status(
        &self,
        profile_id: Uuid,
        confirmed: bool,
    ) -> DomainResult<()> {
        let mut profile = self
            .profiles
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile"))?;

        profile.set_email_confirmation_status(confirmed);
        self.profiles.update(profile).await?;
        Ok(())
    }
}
