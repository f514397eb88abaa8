//! Health check route
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /health | GET | liveness, version and backend reachability |
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "backend": "memory",
//!   "uptime_seconds": 42,
//!   "orders": 3
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::Instant;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    START_TIME.get_or_init(Instant::now);
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// healthy | degraded
    status: &'static str,
    version: &'static str,
    backend: &'static str,
    uptime_seconds: u64,
    /// Order count, absent when the backend did not answer
    #[serde(skip_serializing_if = "Option::is_none")]
    orders: Option<u64>,
}

static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

fn uptime_seconds() -> u64 {
    START_TIME.get_or_init(Instant::now).elapsed().as_secs()
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let orders = state.orders.count().await.ok();

    Json(HealthResponse {
        status: if orders.is_some() { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        backend: state.orders.backend(),
        uptime_seconds: uptime_seconds(),
        orders,
    })
}
