//! Error codes, the application error and the response envelope
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderRestaurantRequired)
//!     .with_detail("field", "restaurant_id");
//! let body: ApiResponse<()> = err.into();
//! assert_eq!(body.code, 4008);
//! ```

mod app_error;
mod category;
mod codes;
mod response;

pub use app_error::{AppError, AppResult};
pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use response::ApiResponse;
