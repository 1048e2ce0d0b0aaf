//! Redis client and cache-backed stores.

pub mod redis_client;
pub mod verification_store;

pub use redis_client::RedisClient;
pub use verification_store::RedisVerificationRecordRepository;
