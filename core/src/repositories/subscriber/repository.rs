//! Subscriber repository trait.

use async_trait::async_trait;

use crate::domain::entities::subscriber::Subscriber;
use crate::errors::DomainError;

/// Repository contract for captured subscriber emails
#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Find a subscriber by normalized email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, DomainError>;

    /// Persist a new subscriber
    async fn create(&self, subscriber: Subscriber) -> Result<Subscriber, DomainError>;
}
