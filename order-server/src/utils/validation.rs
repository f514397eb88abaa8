//! Input validation helpers

use shared::models::{Order, OrderCreate};

use crate::utils::{AppError, AppResult, ErrorCode};

/// Identifiers: order, customer, restaurant, product code
pub const MAX_ID_LEN: usize = 128;

/// Validate that a string, possibly empty, is within the length limit.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.len() > max_len {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Structural checks run before an order is persisted
///
/// The restaurant must be set and at least one line item present.
pub fn validate_order(order: &Order) -> AppResult<()> {
    if order.restaurant_id.trim().is_empty() {
        return Err(AppError::new(ErrorCode::OrderRestaurantRequired)
            .with_detail("field", "restaurant_id"));
    }
    if order.order_items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty).with_detail("field", "order_items"));
    }
    Ok(())
}

/// Length limits on the create payload, checked at the HTTP boundary
pub fn validate_order_create(payload: &OrderCreate) -> AppResult<()> {
    validate_text_len(&payload.customer_id, "customer_id", MAX_ID_LEN)?;
    validate_text_len(&payload.restaurant_id, "restaurant_id", MAX_ID_LEN)?;
    for item in &payload.order_items {
        validate_text_len(&item.product_code, "product_code", MAX_ID_LEN)?;
    }
    Ok(())
}
