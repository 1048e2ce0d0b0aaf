//! Domain entities for the StayNest backend.

pub mod profile;
pub mod subscriber;
pub mod verification_record;

pub use profile::Profile;
pub use subscriber::Subscriber;
pub use verification_record::VerificationRecord;
