//! Business services layered over the repository traits.

pub mod accounts;
pub mod mailing;
pub mod realty;
pub mod subscribers;
pub mod verification;

pub use accounts::AccountService;
pub use mailing::EmailDispatchQueue;
pub use subscribers::SubscriberService;
pub use verification::{PhoneVerificationConfig, PhoneVerificationService, SmsDispatchQueue};
