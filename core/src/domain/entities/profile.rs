//! User profile entity carrying contact details and confirmation flags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Extended attributes of a registered user
///
/// One profile per user account. The confirmation flags are only ever
/// mutated through the account and verification services; the profile is
/// never deleted as part of those flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for the profile
    pub id: Uuid,

    /// Contact email address
    pub email: String,

    /// Contact phone number (E.164 format), if one has been provided
    pub phone_number: Option<String>,

    /// Whether the phone number has been confirmed via SMS code
    pub is_phone_number_confirmed: bool,

    /// Whether the email address has been confirmed via emailed link
    pub is_email_confirmed: bool,

    /// Timestamp when the profile was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the profile was last updated
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new profile with unconfirmed contact details
    pub fn new(email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            phone_number: None,
            is_phone_number_confirmed: false,
            is_email_confirmed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the stored phone number
    pub fn set_phone_number(&mut self, phone_number: String) {
        self.phone_number = Some(phone_number);
        self.updated_at = Utc::now();
    }

    /// Sets the phone confirmation flag
    ///
    /// Pure state mutation, no validation.
    pub fn set_phone_confirmation_status(&mut self, confirmed: bool) {
        self.is_phone_number_confirmed = confirmed;
        self.updated_at = Utc::now();
    }

    /// Sets the email confirmation flag
    pub fn set_email_confirmation_status(&mut self, confirmed: bool) {
        self.is_email_confirmed = confirmed;
        self.updated_at = Utc::now();
    }
}
