//! Order API Handlers

use axum::{Json, extract::State};
use shared::models::{
    Order, OrderCount, OrderCreate, OrderCreated, OrderStatusChanged, OrderStatusUpdate,
};
use shared::request::OrderListQuery;

use crate::api::extract::{AppJson, AppPath, AppQuery};
use crate::core::ServerState;
use crate::utils::validation::validate_order_create;
use crate::utils::{ApiResponse, AppResult};

/// Create an order; id, status and timestamp are assigned server-side
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> AppResult<Json<ApiResponse<OrderCreated>>> {
    validate_order_create(&payload)?;
    let id = state.orders.create(payload.into()).await?;
    Ok(Json(ApiResponse::success(OrderCreated { id })))
}

/// List every order, or one page when `size > 0`
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<OrderListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let orders = if query.is_unpaged() {
        state.orders.get_all().await?
    } else {
        state.orders.get_page(query.page, query.size).await?
    };
    Ok(Json(ApiResponse::success(orders)))
}

pub async fn count(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<OrderCount>>> {
    let count = state.orders.count().await?;
    Ok(Json(ApiResponse::success(OrderCount { count })))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.orders.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(order)))
}

/// `updated == 0` when no order has the id
pub async fn change_status(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderStatusUpdate>,
) -> AppResult<Json<ApiResponse<OrderStatusChanged>>> {
    let updated = state
        .orders
        .change_status(&payload.id, &payload.status)
        .await?;
    Ok(Json(ApiResponse::success(OrderStatusChanged { updated })))
}
