//! Service layer
//!
//! - [`OrderService`] - order orchestration over an [`OrderRepository`](crate::db::repository::OrderRepository)
//! - [`IdGenerator`] / [`Clock`] - injectable id and time sources

pub mod generator;
pub mod order;

pub use generator::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use order::OrderService;
