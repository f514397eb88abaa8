//! Repository Module
//!
//! [`OrderRepository`] is the persistence contract; both backends satisfy it
//! identically:
//!
//! - [`MemoryOrderRepository`] - `Vec<Order>` behind a reader/writer lock
//! - [`SurrealOrderRepository`] - SurrealDB `order` table

pub mod memory;
pub mod surreal;

pub use memory::MemoryOrderRepository;
pub use surreal::SurrealOrderRepository;

use async_trait::async_trait;
use shared::models::Order;
use std::fmt::Debug;
use thiserror::Error;

use crate::utils::{AppError, ErrorCode};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// No order with the given id; empty when a result set could not be read
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The call was aborted before completing (deadline elapsed)
    #[error("Cancelled: {0}")]
    Cancelled(String),
}

impl RepoError {
    /// Expected outcomes that are logged at debug rather than error
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Validation(_))
    }
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) if id.is_empty() => AppError::new(ErrorCode::OrderNotFound),
            RepoError::NotFound(id) => AppError::order_not_found(id),
            // Backend detail stays in the logs
            RepoError::Database(_) => AppError::new(ErrorCode::DatabaseError),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Cancelled(msg) => AppError::timeout(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Order persistence contract
///
/// A failed `count` is its `Err` arm; there is no sentinel value.
#[async_trait]
pub trait OrderRepository: Send + Sync + Debug {
    /// Backend name, reported by the health endpoint
    fn backend(&self) -> &'static str;

    /// Persist a new order, returning the id it is stored under
    async fn create_order(&self, order: Order) -> RepoResult<String>;

    /// [`RepoError::NotFound`] when absent
    async fn get_order_by_id(&self, id: &str) -> RepoResult<Order>;

    /// Number of orders changed: `1`, or `0` when no order has this id
    async fn change_order_status(&self, id: &str, status: &str) -> RepoResult<u64>;

    /// Every order, in backend order
    async fn get_all(&self) -> RepoResult<Vec<Order>>;

    /// `size` orders starting at `page * size`
    async fn get_page(&self, page: u64, size: u64) -> RepoResult<Vec<Order>>;

    async fn count(&self) -> RepoResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_repo_error_into_app_error() {
        let err: AppError = RepoError::NotFound("o-1".into()).into();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err: AppError = RepoError::NotFound(String::new()).into();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
        assert!(err.details.is_none());

        let err: AppError = RepoError::Database("connection reset by peer".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("connection reset"));

        let err: AppError = RepoError::Validation("order id must not be empty".into()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err: AppError = RepoError::Cancelled("count".into()).into();
        assert_eq!(err.code, ErrorCode::TimeoutError);
        assert_eq!(err.http_status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_is_expected() {
        assert!(RepoError::NotFound("x".into()).is_expected());
        assert!(RepoError::Validation("x".into()).is_expected());
        assert!(!RepoError::Database("x".into()).is_expected());
        assert!(!RepoError::Cancelled("x".into()).is_expected());
    }
}
