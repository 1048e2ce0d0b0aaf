pub mod mock;
pub mod repository;

pub use mock::MockProfileRepository;
pub use repository::ProfileRepository;
