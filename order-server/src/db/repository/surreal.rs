//! SurrealDB Order Repository
//!
//! Orders are records of the `order` table keyed by the order id
//! (`order:⟨id⟩`). The stored document carries `customer_id`, `status`,
//! `created_on`, `restaurant_id`, `order_items` and, after the first status
//! change, `last_modified`. Reads project the key back out as `_id`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::{Order, OrderItem};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::{OrderRepository, RepoError, RepoResult};

const ORDER_FIELDS: &str =
    "record::id(id) AS _id, customer_id, status, created_on, restaurant_id, order_items";

/// Document written on create; the id lives in the record key
#[derive(Debug, Serialize)]
struct OrderContent {
    customer_id: String,
    status: String,
    created_on: i64,
    restaurant_id: String,
    order_items: Vec<OrderItem>,
}

impl From<Order> for OrderContent {
    fn from(order: Order) -> Self {
        Self {
            customer_id: order.customer_id,
            status: order.status,
            created_on: order.created_on,
            restaurant_id: order.restaurant_id,
            order_items: order.order_items,
        }
    }
}

/// Document as read back
#[derive(Debug, Deserialize)]
struct OrderDocument {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    customer_id: String,
    status: String,
    created_on: i64,
    restaurant_id: String,
    #[serde(default)]
    order_items: Vec<OrderItem>,
}

impl From<OrderDocument> for Order {
    fn from(doc: OrderDocument) -> Self {
        Self {
            id: doc.id,
            customer_id: doc.customer_id,
            status: doc.status,
            created_on: doc.created_on,
            restaurant_id: doc.restaurant_id,
            order_items: doc.order_items,
        }
    }
}

/// Decode rows one by one; a row that does not decode is dropped
fn decode_orders(rows: Vec<serde_json::Value>) -> Vec<Order> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<OrderDocument>(row) {
            Ok(doc) => Some(doc.into()),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping undecodable order record");
                None
            }
        })
        .collect()
}

#[derive(Clone)]
pub struct SurrealOrderRepository {
    db: Surreal<Any>,
}

impl std::fmt::Debug for SurrealOrderRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurrealOrderRepository").finish_non_exhaustive()
    }
}

impl SurrealOrderRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    /// Run a read query and decode its first result set
    ///
    /// Query failures are database errors; a result set that cannot be
    /// read after the query ran is reported as not found.
    async fn select(
        &self,
        query: String,
        bindings: Vec<(&'static str, serde_json::Value)>,
    ) -> RepoResult<Vec<Order>> {
        let mut request = self.db.query(query);
        for binding in bindings {
            request = request.bind(binding);
        }
        let mut result = request.await.map_err(|e| {
            tracing::error!(error = %e, "Order query failed");
            RepoError::from(e)
        })?;

        let rows: Vec<serde_json::Value> = result.take(0).map_err(|e| {
            tracing::debug!(error = %e, "Order result set unreadable");
            RepoError::NotFound(String::new())
        })?;

        Ok(decode_orders(rows))
    }
}

#[async_trait]
impl OrderRepository for SurrealOrderRepository {
    fn backend(&self) -> &'static str {
        "surreal"
    }

    async fn create_order(&self, order: Order) -> RepoResult<String> {
        if order.id.is_empty() {
            return Err(RepoError::Validation("order id must not be empty".into()));
        }

        let id = order.id.clone();
        let mut result = self
            .db
            .query("CREATE type::thing('order', $id) CONTENT $data RETURN VALUE record::id(id)")
            .bind(("id", id.clone()))
            .bind(("data", OrderContent::from(order)))
            .await?;

        let created: Vec<String> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database(format!("order {id} was not created")))
    }

    async fn get_order_by_id(&self, id: &str) -> RepoResult<Order> {
        let orders = self
            .select(
                format!("SELECT {ORDER_FIELDS} FROM type::thing('order', $id)"),
                vec![("id", serde_json::Value::from(id))],
            )
            .await
            .map_err(|e| match e {
                RepoError::NotFound(_) => RepoError::NotFound(id.to_string()),
                other => other,
            })?;

        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    async fn change_order_status(&self, id: &str, status: &str) -> RepoResult<u64> {
        // an empty key is not a valid record id, so it can match nothing
        if id.is_empty() {
            return Ok(0);
        }

        let mut result = self
            .db
            .query(
                "UPDATE type::thing('order', $id) \
                 SET status = $status, last_modified = time::unix(time::now()) \
                 RETURN VALUE status",
            )
            .bind(("id", id.to_string()))
            .bind(("status", status.to_string()))
            .await?;

        let updated: Vec<serde_json::Value> = result.take(0)?;
        Ok(updated.len() as u64)
    }

    async fn get_all(&self) -> RepoResult<Vec<Order>> {
        self.select(format!("SELECT {ORDER_FIELDS} FROM order"), Vec::new())
            .await
    }

    async fn get_page(&self, page: u64, size: u64) -> RepoResult<Vec<Order>> {
        if size == 0 {
            return Ok(Vec::new());
        }
        // LIMIT and START only take values up to u32::MAX
        let limit = u32::try_from(size).unwrap_or(u32::MAX);
        let Some(start) = page
            .checked_mul(size)
            .and_then(|start| u32::try_from(start).ok())
        else {
            return Ok(Vec::new());
        };

        self.select(
            format!("SELECT {ORDER_FIELDS} FROM order LIMIT $limit START $start"),
            vec![
                ("limit", serde_json::Value::from(limit)),
                ("start", serde_json::Value::from(start)),
            ],
        )
        .await
    }

    async fn count(&self) -> RepoResult<u64> {
        let mut result = self.db.query("SELECT count() FROM order GROUP ALL").await?;

        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0).max(0) as u64)
    }
}
