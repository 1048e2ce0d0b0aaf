//! # StayNest Core
//!
//! Core business logic and domain layer for the StayNest backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Profile, Subscriber, VerificationRecord};
pub use domain::value_objects::{DeliveryResult, DeliveryStatus, EmailMessage};
pub use errors::{DomainError, DomainResult};
