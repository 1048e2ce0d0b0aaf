//! Mock implementation of VerificationRecordRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;

use super::repository::VerificationRecordRepository;

/// In-memory verification record store for tests
///
/// Keyed by profile id, which enforces the one-record-per-profile
/// invariant structurally.
pub struct MockVerificationRecordRepository {
    records: Arc<RwLock<HashMap<Uuid, VerificationRecord>>>,
}

impl MockVerificationRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockVerificationRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationRecordRepository for MockVerificationRecordRepository {
    async fn find_by_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&profile_id).cloned())
    }

    async fn set_code(
        &self,
        profile_id: Uuid,
        code: &str,
    ) -> Result<VerificationRecord, DomainError> {
        let mut records = self.records.write().await;

        let record = match records.get_mut(&profile_id) {
            Some(existing) => {
                existing.set_code(code.to_string());
                existing.clone()
            }
            None => {
                let record = VerificationRecord::new(profile_id, code.to_string());
                records.insert(profile_id, record.clone());
                record
            }
        };

        Ok(record)
    }

    async fn delete_by_profile(&self, profile_id: Uuid) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&profile_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_find_returns_code() {
        let repo = MockVerificationRecordRepository::new();
        let profile_id = Uuid::new_v4();

        repo.set_code(profile_id, "1234").await.unwrap();

        let record = repo.find_by_profile(profile_id).await.unwrap().unwrap();
        assert_eq!(record.code, "1234");
    }

    #[tokio::test]
    async fn test_find_without_set_returns_none() {
        let repo = MockVerificationRecordRepository::new();

        let record = repo.find_by_profile(Uuid::new_v4()).await.unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_set_code_overwrites_without_history() {
        let repo = MockVerificationRecordRepository::new();
        let profile_id = Uuid::new_v4();

        repo.set_code(profile_id, "1111").await.unwrap();
        repo.set_code(profile_id, "2222").await.unwrap();

        let record = repo.find_by_profile(profile_id).await.unwrap().unwrap();
        assert_eq!(record.code, "2222");
    }

    #[tokio::test]
    async fn test_delete_by_profile() {
        let repo = MockVerificationRecordRepository::new();
        let profile_id = Uuid::new_v4();

        repo.set_code(profile_id, "1234").await.unwrap();
        assert!(repo.delete_by_profile(profile_id).await.unwrap());
        assert!(!repo.delete_by_profile(profile_id).await.unwrap());
        assert!(repo.find_by_profile(profile_id).await.unwrap().is_none());
    }
}
