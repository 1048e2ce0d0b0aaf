//! Value objects shared across services.

pub mod delivery;
pub mod email_message;

pub use delivery::{DeliveryResult, DeliveryStatus};
pub use email_message::EmailMessage;
