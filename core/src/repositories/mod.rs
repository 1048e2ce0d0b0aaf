//! Repository interfaces and in-memory test doubles.
//!
//! Concrete database-backed implementations live in the infrastructure
//! crate; the traits here keep the domain layer free of storage concerns.

pub mod profile;
pub mod subscriber;
pub mod verification;

pub use profile::{MockProfileRepository, ProfileRepository};
pub use subscriber::{MockSubscriberRepository, SubscriberRepository};
pub use verification::{MockVerificationRecordRepository, VerificationRecordRepository};
