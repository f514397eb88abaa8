//! Coarse grouping of error codes, plus the HTTP status each one maps to

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Which part of the system a code belongs to, taken from its range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Auth,
    Order,
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            1 => Self::Auth,
            4 => Self::Order,
            9.. => Self::System,
            _ => Self::General,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Order => "order",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Failures a client may retry unchanged
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::NetworkError | Self::TimeoutError)
    }

    pub fn http_status(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Auth => StatusCode::UNAUTHORIZED,
            ErrorCategory::System if self.is_transient() => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCategory::System => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCategory::General | ErrorCategory::Order => match self {
                Self::Success => StatusCode::OK,
                Self::NotFound | Self::OrderNotFound => StatusCode::NOT_FOUND,
                Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
        }
    }
}
