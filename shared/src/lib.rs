//! Shared types for the order service
//!
//! Common types used by the server crate and by any client talking to it:
//! order models, request/response payloads, the unified error system and
//! small utilities.

pub mod error;
pub mod models;
pub mod request;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Order, OrderItem};
pub use request::OrderListQuery;
