//! Redis-backed verification record store.
//!
//! Alternative to the MySQL store for deployments that keep verification
//! state in the cache tier. Records are stored as JSON under
//! `verification:record:{profile_id}` with no TTL: a record lives until the
//! next phone-change request overwrites it or a successful confirmation
//! deletes it.

use async_trait::async_trait;
use uuid::Uuid;

use sn_core::domain::entities::verification_record::VerificationRecord;
use sn_core::errors::DomainError;
use sn_core::repositories::VerificationRecordRepository;

use super::redis_client::RedisClient;

/// Verification record store on top of the injected Redis client
#[derive(Clone)]
pub struct RedisVerificationRecordRepository {
    redis: RedisClient,
}

impl RedisVerificationRecordRepository {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    fn record_key(profile_id: Uuid) -> String {
        format!("verification:record:{}", profile_id)
    }
}

#[async_trait]
impl VerificationRecordRepository for RedisVerificationRecordRepository {
    async fn find_by_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        let raw = self
            .redis
            .get(&Self::record_key(profile_id))
            .await
            .map_err(cache_error)?;

        match raw {
            Some(json) => {
                let record = serde_json::from_str(&json).map_err(|e| DomainError::Internal {
                    message: format!("Corrupt verification record in cache: {}", e),
                })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn set_code(
        &self,
        profile_id: Uuid,
        code: &str,
    ) -> Result<VerificationRecord, DomainError> {
        let record = match self.find_by_profile(profile_id).await? {
            Some(mut existing) => {
                existing.set_code(code.to_string());
                existing
            }
            None => VerificationRecord::new(profile_id, code.to_string()),
        };

        let json = serde_json::to_string(&record).map_err(|e| DomainError::Internal {
            message: format!("Failed to serialize verification record: {}", e),
        })?;

        self.redis
            .set(&Self::record_key(profile_id), &json)
            .await
            .map_err(cache_error)?;

        Ok(record)
    }

    async fn delete_by_profile(&self, profile_id: Uuid) -> Result<bool, DomainError> {
        self.redis
            .delete(&Self::record_key(profile_id))
            .await
            .map_err(cache_error)
    }
}

fn cache_error(e: crate::InfrastructureError) -> DomainError {
    DomainError::Internal {
        message: format!("Cache operation failed: {}", e),
    }
}
