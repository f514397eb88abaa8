//! Request types for the shared crate

use serde::{Deserialize, Serialize};

/// Query parameters of the order listing endpoint
///
/// `size == 0` (or absent) requests every order; otherwise `size` orders
/// are returned starting at `page * size` (zero-indexed page).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub size: u64,
}

impl OrderListQuery {
    /// Whether the whole collection is requested
    pub fn is_unpaged(&self) -> bool {
        self.size == 0
    }
}
