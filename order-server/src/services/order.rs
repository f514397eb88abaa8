//! Order Service
//!
//! Stateless orchestration over an [`OrderRepository`]. `create` validates
//! first and only then assigns id, status and timestamp and persists. Every
//! repository call runs under the configured deadline; each failure is
//! logged once here and handed upward unchanged.

use shared::models::{ORDER_STATUS_PENDING, Order};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::db::repository::{OrderRepository, RepoError, RepoResult};
use crate::services::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::utils::validation::validate_order;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl OrderService {
    pub fn new(
        repo: Arc<dyn OrderRepository>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        timeout: Duration,
    ) -> Self {
        Self {
            repo,
            ids,
            clock,
            timeout,
        }
    }

    /// UUID ids and the system clock
    pub fn with_defaults(repo: Arc<dyn OrderRepository>, timeout: Duration) -> Self {
        Self::new(repo, Arc::new(UuidGenerator), Arc::new(SystemClock), timeout)
    }

    pub fn backend(&self) -> &'static str {
        self.repo.backend()
    }

    /// Run a repository future under the deadline; the future is dropped
    /// (aborting its I/O) when the deadline elapses
    async fn call<T, F>(&self, method: &'static str, fut: F) -> RepoResult<T>
    where
        F: Future<Output = RepoResult<T>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(RepoError::Cancelled(format!(
                "{method} did not complete within {}ms",
                self.timeout.as_millis()
            ))),
        }
    }

    fn fail(method: &'static str, order_id: Option<&str>, err: RepoError) -> AppError {
        if err.is_expected() {
            tracing::debug!(method, order_id, error = %err, "Order operation failed");
        } else {
            tracing::error!(method, order_id, error = %err, "Order repository error");
        }
        err.into()
    }

    /// Validate, stamp and persist a new order; returns the stored id
    pub async fn create(&self, mut order: Order) -> AppResult<String> {
        if let Err(e) = validate_order(&order) {
            tracing::debug!(method = "create", code = %e.code, error = %e, "Order rejected");
            return Err(e);
        }

        order.id = self.ids.generate_id();
        order.status = ORDER_STATUS_PENDING.to_string();
        order.created_on = self.clock.now_timestamp();

        let order_id = order.id.clone();
        let id = self
            .call("create", self.repo.create_order(order))
            .await
            .map_err(|e| Self::fail("create", Some(&order_id), e))?;

        tracing::debug!(order_id = %id, "Order created");
        Ok(id)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Order> {
        self.call("get_by_id", self.repo.get_order_by_id(id))
            .await
            .map_err(|e| Self::fail("get_by_id", Some(id), e))
    }

    pub async fn get_all(&self) -> AppResult<Vec<Order>> {
        self.call("get_all", self.repo.get_all())
            .await
            .map_err(|e| Self::fail("get_all", None, e))
    }

    pub async fn get_page(&self, page: u64, size: u64) -> AppResult<Vec<Order>> {
        self.call("get_page", self.repo.get_page(page, size))
            .await
            .map_err(|e| Self::fail("get_page", None, e))
    }

    /// Number of orders changed; `0` without an error means no such order
    pub async fn change_status(&self, id: &str, status: &str) -> AppResult<u64> {
        let updated = self
            .call("change_status", self.repo.change_order_status(id, status))
            .await
            .map_err(|e| Self::fail("change_status", Some(id), e))?;

        if updated == 0 {
            tracing::debug!(order_id = %id, "Status change matched no order");
        }
        Ok(updated)
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.call("count", self.repo.count())
            .await
            .map_err(|e| Self::fail("count", None, e))
    }
}
