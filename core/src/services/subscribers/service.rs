//! Subscriber service implementation.

use std::sync::Arc;

use sn_shared::utils::email::{is_valid_email, normalize_email};

use crate::domain::entities::subscriber::Subscriber;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::SubscriberRepository;

/// Service capturing newsletter subscriber emails
pub struct SubscriberService<R>
where
    R: SubscriberRepository,
{
    subscribers: Arc<R>,
}

impl<R> SubscriberService<R>
where
    R: SubscriberRepository,
{
    pub fn new(subscribers: Arc<R>) -> Self {
        Self { subscribers }
    }

    /// Capture a subscriber email
    ///
    /// Validates and normalizes the address, then get-or-creates the row:
    /// subscribing twice is a no-op returning the existing subscriber.
    pub async fn subscribe(&self, email: &str) -> DomainResult<Subscriber> {
        if !is_valid_email(email) {
            return Err(DomainError::Validation {
                message: format!("Invalid email address: {}", email),
            });
        }

        let normalized = normalize_email(email);
        if let Some(existing) = self.subscribers.find_by_email(&normalized).await? {
            return Ok(existing);
        }

        let subscriber = self.subscribers.create(Subscriber::new(normalized)).await?;

        tracing::info!(
            subscriber_id = %subscriber.id,
            event = "subscriber_captured",
            "Captured new subscriber email"
        );

        Ok(subscriber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repositories::MockSubscriberRepository;

    #[tokio::test]
    async fn test_subscribe_captures_email() {
        let repo = Arc::new(MockSubscriberRepository::new());
        let service = SubscriberService::new(Arc::clone(&repo));

        let subscriber = service.subscribe("Guest@Example.COM").await.unwrap();
        assert_eq!(subscriber.email, "Guest@example.com");
    }

    #[tokio::test]
    async fn test_subscribe_twice_returns_existing() {
        let repo = Arc::new(MockSubscriberRepository::new());
        let service = SubscriberService::new(Arc::clone(&repo));

        let first = service.subscribe("guest@example.com").await.unwrap();
        let second = service.subscribe("guest@example.com").await.unwrap();
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_subscribe_rejects_invalid_email() {
        let repo = Arc::new(MockSubscriberRepository::new());
        let service = SubscriberService::new(repo);

        let result = service.subscribe("not-an-email").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
