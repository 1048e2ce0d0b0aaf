//! MySQL implementation of the VerificationRecordRepository trait.
//!
//! The `verification_records` table keys on `profile_id` with a unique
//! constraint, so the one-record-per-profile invariant is enforced by the
//! schema; `set_code` is an upsert against that key.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sn_core::domain::entities::verification_record::VerificationRecord;
use sn_core::errors::DomainError;
use sn_core::repositories::VerificationRecordRepository;

/// MySQL-backed verification record store
pub struct MySqlVerificationRecordRepository {
    pool: MySqlPool,
}

impl MySqlVerificationRecordRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<VerificationRecord, DomainError> {
        let profile_id: String = row
            .try_get("profile_id")
            .map_err(|e| storage_error("profile_id", e))?;

        Ok(VerificationRecord {
            profile_id: Uuid::parse_str(&profile_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID in verification_records.profile_id: {}", e),
            })?,
            code: row.try_get("code").map_err(|e| storage_error("code", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| storage_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| storage_error("updated_at", e))?,
        })
    }
}

#[async_trait]
impl VerificationRecordRepository for MySqlVerificationRecordRepository {
    async fn find_by_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        let query = r#"
            SELECT profile_id, code, created_at, updated_at
            FROM verification_records
            WHERE profile_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(profile_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn set_code(
        &self,
        profile_id: Uuid,
        code: &str,
    ) -> Result<VerificationRecord, DomainError> {
        let record = VerificationRecord::new(profile_id, code.to_string());

        // Last write wins on concurrent requests; no locking or version check.
        let query = r#"
            INSERT INTO verification_records (profile_id, code, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE code = VALUES(code), updated_at = VALUES(updated_at)
        "#;

        sqlx::query(query)
            .bind(record.profile_id.to_string())
            .bind(&record.code)
            .bind(record.created_at)
            .bind(record.updated_at)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        // Re-read so the caller sees the stored row (created_at survives an
        // upsert of an existing record).
        self.find_by_profile(profile_id)
            .await?
            .ok_or_else(|| DomainError::Internal {
                message: "Verification record missing immediately after upsert".to_string(),
            })
    }

    async fn delete_by_profile(&self, profile_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM verification_records WHERE profile_id = ?")
            .bind(profile_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn storage_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Failed to read verification_records.{}: {}", column, e),
    }
}

fn query_error(e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Database query failed: {}", e),
    }
}
