//! Order API Module
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST | /api/v1/orders | create |
//! | GET | /api/v1/orders?page=&size= | list all (`size` 0 or absent) or one page |
//! | GET | /api/v1/orders/count | count |
//! | GET | /api/v1/orders/id/{id} | get by id |
//! | PUT | /api/v1/orders/status | change status (body `{id, status}`) |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/count", get(handler::count))
        .route("/id/{id}", get(handler::get_by_id))
        .route("/status", put(handler::change_status))
}
