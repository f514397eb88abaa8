use super::category::ErrorCategory;
use super::codes::ErrorCode;
use super::response::ApiResponse;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::{Map, Value};

/// Error crossing the service and HTTP layers
///
/// `message` is what the client sees, so callers never put storage or
/// driver text in it. Context for the client goes in `details`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<Map<String, Value>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, message)
    }

    /// Lookup miss; the requested id is echoed back in `details.id`
    pub fn order_not_found(id: impl Into<String>) -> Self {
        Self::new(ErrorCode::OrderNotFound).with_detail("id", id.into())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, message)
    }

    pub fn bad_routing(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::BadRouting, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TimeoutError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "Request failed");
        }
        let status = self.http_status();
        (status, Json(ApiResponse::<()>::from(self))).into_response()
    }
}
