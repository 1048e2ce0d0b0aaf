//! Listing image ordering.

use serde::{Deserialize, Serialize};

/// Desired position of one listing image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOrder {
    /// Image identifier as submitted by the client
    pub image_id: String,

    /// Zero-based position within the listing gallery
    pub position: u32,
}

/// Convert a client reorder payload into image orders
///
/// Entries whose id is not entirely decimal digits are dropped (the client
/// payload can carry placeholder rows); input order is preserved.
pub fn parse_image_orders(pairs: &[(String, u32)]) -> Vec<ImageOrder> {
    pairs
        .iter()
        .filter(|(image_id, _)| !image_id.is_empty() && image_id.chars().all(|c| c.is_ascii_digit()))
        .map(|(image_id, position)| ImageOrder {
            image_id: image_id.clone(),
            position: *position,
        })
        .collect()
}
