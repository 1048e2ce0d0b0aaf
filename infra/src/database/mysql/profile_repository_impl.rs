//! MySQL implementation of the ProfileRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sn_core::domain::entities::profile::Profile;
use sn_core::errors::DomainError;
use sn_core::repositories::ProfileRepository;

/// MySQL-backed profile repository
pub struct MySqlProfileRepository {
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<Profile, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| storage_error("id", e))?;

        Ok(Profile {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID in profiles.id: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| storage_error("email", e))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| storage_error("phone_number", e))?,
            is_phone_number_confirmed: row
                .try_get("is_phone_number_confirmed")
                .map_err(|e| storage_error("is_phone_number_confirmed", e))?,
            is_email_confirmed: row
                .try_get("is_email_confirmed")
                .map_err(|e| storage_error("is_email_confirmed", e))?,
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
impl ProfileRepository for MySqlProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError> {
        let query = r#"
            SELECT id, email, phone_number,
                   is_phone_number_confirmed, is_email_confirmed,
                   created_at, updated_at
            FROM profiles
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, profile: Profile) -> Result<Profile, DomainError> {
        let query = r#"
            INSERT INTO profiles (
                id, email, phone_number,
                is_phone_number_confirmed, is_email_confirmed,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(profile.id.to_string())
            .bind(&profile.email)
            .bind(&profile.phone_number)
            .bind(profile.is_phone_number_confirmed)
            .bind(profile.is_email_confirmed)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(profile)
    }

    async fn update(&self, profile: Profile) -> Result<Profile, DomainError> {
        let query = r#"
            UPDATE profiles
            SET email = ?, phone_number = ?,
                is_phone_number_confirmed = ?, is_email_confirmed = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&profile.email)
            .bind(&profile.phone_number)
            .bind(profile.is_phone_number_confirmed)
            .bind(profile.is_email_confirmed)
            .bind(profile.updated_at)
            .bind(profile.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Profile"));
        }

        Ok(profile)
    }
}

fn storage_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Failed to read profiles.{}: {}", column, e),
    }
}

fn query_error(e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Database query failed: {}", e),
    }
}
