pub mod mock;
pub mod repository;

pub use mock::MockVerificationRecordRepository;
pub use repository::VerificationRecordRepository;
