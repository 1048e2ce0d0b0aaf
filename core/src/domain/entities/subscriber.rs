//! Newsletter subscriber entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A captured subscriber email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Unique identifier for the subscriber
    pub id: Uuid,

    /// Subscriber email address (normalized)
    pub email: String,

    /// Timestamp when the subscription was captured
    pub created_at: DateTime<Utc>,
}

impl Subscriber {
    /// Creates a new subscriber for the given (already normalized) email
    pub fn new(email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            created_at: Utc::now(),
        }
    }
}
