//! Order Model

use serde::{Deserialize, Serialize};

/// Status assigned to every order at creation
pub const ORDER_STATUS_PENDING: &str = "Pending";

/// Order line item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_code: String,
    pub name: String,
    /// Price in currency unit
    pub unit_price: f64,
    pub quantity: i32,
}

/// Order entity
///
/// `id`, `status` and `created_on` are owned by the service: they are
/// assigned on creation and only `status` changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    /// Free-form lifecycle value, `"Pending"` at creation
    pub status: String,
    /// Unix seconds
    pub created_on: i64,
    pub restaurant_id: String,
    pub order_items: Vec<OrderItem>,
}

/// Create order payload
///
/// Every field is optional on the wire. `id`, `status` and `created_on` are
/// accepted for compatibility but overwritten by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderCreate {
    pub id: String,
    pub customer_id: String,
    pub status: String,
    pub created_on: i64,
    pub restaurant_id: String,
    pub order_items: Vec<OrderItem>,
}

impl From<OrderCreate> for Order {
    fn from(value: OrderCreate) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            status: value.status,
            created_on: value.created_on,
            restaurant_id: value.restaurant_id,
            order_items: value.order_items,
        }
    }
}

/// Change status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub id: String,
    pub status: String,
}

/// Response of a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub id: String,
}

/// Response of a status change; `updated == 0` means no order matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusChanged {
    pub updated: u64,
}

/// Response of the count endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCount {
    pub count: u64,
}
