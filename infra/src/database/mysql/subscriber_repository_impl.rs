//! MySQL implementation of the SubscriberRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sn_core::domain::entities::subscriber::Subscriber;
use sn_core::errors::DomainError;
use sn_core::repositories::SubscriberRepository;

/// MySQL-backed subscriber store
pub struct MySqlSubscriberRepository {
    pool: MySqlPool,
}

impl MySqlSubscriberRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_subscriber(row: &sqlx::mysql::MySqlRow) -> Result<Subscriber, DomainError> {
        let id: String = row.try_get("id").map_err(|e| storage_error("id", e))?;

        Ok(Subscriber {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID in subscribers.id: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| storage_error("email", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| storage_error("created_at", e))?,
        })
    }
}

#[async_trait]
impl SubscriberRepository for MySqlSubscriberRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, DomainError> {
        let result = sqlx::query(
            "SELECT id, email, created_at FROM subscribers WHERE email = ? LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_subscriber(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, subscriber: Subscriber) -> Result<Subscriber, DomainError> {
        sqlx::query("INSERT INTO subscribers (id, email, created_at) VALUES (?, ?, ?)")
            .bind(subscriber.id.to_string())
            .bind(&subscriber.email)
            .bind(subscriber.created_at)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(subscriber)
    }
}

fn storage_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Failed to read subscribers.{}: {}", column, e),
    }
}

fn query_error(e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Database query failed: {}", e),
    }
}
