//! Outbound email message value object.

use serde::{Deserialize, Serialize};

/// A plain-text email ready for asynchronous dispatch
///
/// Body rendering (templates, HTML alternatives) is owned by the caller;
/// this type only carries the finished content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,

    /// Subject line
    pub subject: String,

    /// Plain-text body
    pub body: String,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}
