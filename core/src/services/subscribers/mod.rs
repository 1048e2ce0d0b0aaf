//! Subscriber email capture.

mod service;

pub use service::SubscriberService;
