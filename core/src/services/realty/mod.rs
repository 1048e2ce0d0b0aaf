//! Listing-related services.

pub mod ordering;

pub use ordering::{parse_image_orders, ImageOrder};
