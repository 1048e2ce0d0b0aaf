//! Mock implementation of SubscriberRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::subscriber::Subscriber;
use crate::errors::DomainError;

use super::repository::SubscriberRepository;

/// In-memory subscriber store for tests
pub struct MockSubscriberRepository {
    subscribers: Arc<RwLock<HashMap<Uuid, Subscriber>>>,
}

impl MockSubscriberRepository {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockSubscriberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriberRepository for MockSubscriberRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, DomainError> {
        let subscribers = self.subscribers.read().await;
        Ok(subscribers.values().find(|s| s.email == email).cloned())
    }

    async fn create(&self, subscriber: Subscriber) -> Result<Subscriber, DomainError> {
        let mut subscribers = self.subscribers.write().await;

        if subscribers.values().any(|s| s.email == subscriber.email) {
            return Err(DomainError::Validation {
                message: "Email already subscribed".to_string(),
            });
        }

        subscribers.insert(subscriber.id, subscriber.clone());
        Ok(subscriber)
    }
}
