//! API module
//!
//! - [`health`] - liveness and backend check
//! - [`orders`] - order endpoints under `/api/v1/orders`
//! - [`extract`] - extractors whose rejections use the error envelope

pub mod extract;
pub mod health;
pub mod orders;

pub use crate::utils::{ApiResponse, AppResult};
