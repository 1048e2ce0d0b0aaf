//! Mock implementation of ProfileRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::profile::Profile;
use crate::errors::DomainError;

use super::repository::ProfileRepository;

/// In-memory profile repository for tests
pub struct MockProfileRepository {
    profiles: Arc<RwLock<HashMap<Uuid, Profile>>>,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&id).cloned())
    }

    async fn create(&self, profile: Profile) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.write().await;

        if profiles.contains_key(&profile.id) {
            return Err(DomainError::Validation {
                message: "Profile already exists".to_string(),
            });
        }

        profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn update(&self, profile: Profile) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.write().await;

        if !profiles.contains_key(&profile.id) {
            return Err(DomainError::not_found("Profile"));
        }

        profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockProfileRepository::new();
        let profile = Profile::new("guest@example.com".to_string());
        let id = profile.id;

        repo.create(profile).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap();
        assert_eq!(found.unwrap().email, "guest@example.com");
    }

    #[tokio::test]
    async fn test_update_missing_profile_fails() {
        let repo = MockProfileRepository::new();
        let profile = Profile::new("guest@example.com".to_string());

        let result = repo.update(profile).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
