//! In-memory Order Repository
//!
//! Orders live in an index-addressed `Vec` behind a `parking_lot::RwLock`.
//! The lock is held for the whole of each operation and never across an
//! `.await`. Reads hand out clones.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::Order;
use std::sync::Arc;

use super::{OrderRepository, RepoError, RepoResult};
use crate::services::{IdGenerator, UuidGenerator};

#[derive(Debug, Clone)]
pub struct MemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for MemoryOrderRepository {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator))
    }
}

impl MemoryOrderRepository {
    /// `ids` fills in orders that arrive without an id
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            ids,
        }
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create_order(&self, mut order: Order) -> RepoResult<String> {
        if order.id.is_empty() {
            order.id = self.ids.generate_id();
        }

        let mut orders = self.orders.write();
        if orders.iter().any(|o| o.id == order.id) {
            return Err(RepoError::Database(format!(
                "order {} already exists",
                order.id
            )));
        }
        let id = order.id.clone();
        orders.push(order);
        Ok(id)
    }

    async fn get_order_by_id(&self, id: &str) -> RepoResult<Order> {
        self.orders
            .read()
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    async fn change_order_status(&self, id: &str, status: &str) -> RepoResult<u64> {
        let mut orders = self.orders.write();
        match orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.status = status.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn get_all(&self) -> RepoResult<Vec<Order>> {
        Ok(self.orders.read().clone())
    }

    async fn get_page(&self, page: u64, size: u64) -> RepoResult<Vec<Order>> {
        let skip = usize::try_from(page.saturating_mul(size)).unwrap_or(usize::MAX);
        let take = usize::try_from(size).unwrap_or(usize::MAX);

        Ok(self
            .orders
            .read()
            .iter()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn count(&self) -> RepoResult<u64> {
        Ok(self.orders.read().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Debug, Default)]
    struct SequentialIds(AtomicU64);

    impl IdGenerator for SequentialIds {
        fn generate_id(&self) -> String {
            (self.0.fetch_add(1, Ordering::SeqCst) + 1).to_string()
        }
    }

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            restaurant_id: "r1".to_string(),
            status: "Pending".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_store() {
        let repo = MemoryOrderRepository::default();
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.get_all().await.unwrap().is_empty());
        assert!(repo.get_page(0, 10).await.unwrap().is_empty());
        assert_eq!(repo.change_order_status("1", "Shipped").await.unwrap(), 0);
        assert!(matches!(
            repo.get_order_by_id("1").await,
            Err(RepoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_assigns_missing_id() {
        let repo = MemoryOrderRepository::new(Arc::new(SequentialIds::default()));

        assert_eq!(repo.create_order(order("")).await.unwrap(), "1");
        assert_eq!(repo.create_order(order("abc")).await.unwrap(), "abc");
        assert_eq!(repo.create_order(order("")).await.unwrap(), "2");
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = MemoryOrderRepository::default();
        repo.create_order(order("1")).await.unwrap();
        assert!(matches!(
            repo.create_order(order("1")).await,
            Err(RepoError::Database(_))
        ));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_reads_return_copies() {
        let repo = MemoryOrderRepository::default();
        repo.create_order(order("1")).await.unwrap();

        let mut fetched = repo.get_order_by_id("1").await.unwrap();
        fetched.status = "Tampered".to_string();

        let mut all = repo.get_all().await.unwrap();
        all[0].status = "Tampered".to_string();

        assert_eq!(repo.get_order_by_id("1").await.unwrap().status, "Pending");
    }

    #[tokio::test]
    async fn test_page_bounds() {
        let repo = MemoryOrderRepository::default();
        for i in 0..5 {
            repo.create_order(order(&i.to_string())).await.unwrap();
        }

        assert_eq!(repo.get_page(0, 2).await.unwrap().len(), 2);
        assert_eq!(repo.get_page(2, 2).await.unwrap().len(), 1);
        assert!(repo.get_page(3, 2).await.unwrap().is_empty());
        assert!(repo.get_page(u64::MAX, u64::MAX).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates() {
        let repo = MemoryOrderRepository::default();
        let mut handles = Vec::new();
        for _ in 0..32 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create_order(order("")).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(repo.count().await.unwrap(), 32);
    }
}
