//! Phone-number verification workflow
//!
//! This module implements the full verification flow:
//! - random code generation
//! - per-profile code storage with overwrite-on-request semantics
//! - confirmation-state transitions on the profile
//! - asynchronous SMS dispatch through a task-queue seam
//! - code checking against user-submitted digits

mod code;
mod config;
mod digits;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use code::{generate_sms_code, CODE_LENGTH};
pub use config::PhoneVerificationConfig;
pub use digits::join_code_digits;
pub use service::PhoneVerificationService;
pub use traits::SmsDispatchQueue;
