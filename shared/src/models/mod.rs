//! Data models
//!
//! Shared between the order server and its HTTP clients.

pub mod order;

// Re-exports
pub use order::*;
