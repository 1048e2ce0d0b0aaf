//! Account-level notification and confirmation-state operations.

mod service;

pub use service::AccountService;
