pub mod mock;
pub mod repository;

pub use mock::MockSubscriberRepository;
pub use repository::SubscriberRepository;
