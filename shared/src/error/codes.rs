//! Numeric error codes carried in every failure envelope

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares the code table once; the enum, its default messages and the
/// reverse lookup are all generated from it so they cannot drift apart.
macro_rules! error_codes {
    ($( $(#[$meta:meta])* $name:ident = $value:literal => $message:literal, )+) => {
        /// Stable numeric tag of a failure class
        ///
        /// Serialized as the bare number. Ranges: `0..1000` general,
        /// `1000..2000` auth, `4000..5000` order, `9000..` system.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "u16", try_from = "u16")]
        #[repr(u16)]
        pub enum ErrorCode {
            $( $(#[$meta])* $name = $value, )+
        }

        impl ErrorCode {
            /// Every known code, in table order
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$name),+];

            /// Default message shown to clients when no custom one is given
            pub const fn message(&self) -> &'static str {
                match self {
                    $( ErrorCode::$name => $message, )+
                }
            }
        }

        impl TryFrom<u16> for ErrorCode {
            type Error = InvalidErrorCode;

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                match value {
                    $( $value => Ok(ErrorCode::$name), )+
                    other => Err(InvalidErrorCode(other)),
                }
            }
        }
    };
}

error_codes! {
    Success = 0 => "OK",
    Unknown = 1 => "Something went wrong",
    /// Generic field validation failure
    ValidationFailed = 2 => "Validation failed",
    NotFound = 3 => "Not found",
    /// Body or query string did not decode
    InvalidRequest = 5 => "Malformed request",
    ValueOutOfRange = 8 => "Value out of range",
    /// Unmatched route or missing path parameter
    BadRouting = 9 => "Bad routing",

    /// Reserved for a future auth layer
    NotAuthenticated = 1001 => "Not authenticated",

    OrderNotFound = 4001 => "Order not found",
    OrderEmpty = 4007 => "Order has no items",
    OrderRestaurantRequired = 4008 => "Order has no restaurant",

    InternalError = 9001 => "Internal error",
    /// Storage failure; the message never exposes the backend's own text
    DatabaseError = 9002 => "Unable to handle request",
    NetworkError = 9003 => "Network unavailable",
    /// Deadline elapsed or the call was cancelled
    TimeoutError = 9004 => "Request timed out",
    ConfigError = 9005 => "Invalid configuration",
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.code(), f)
    }
}

/// A number outside the code table
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code {0}")]
pub struct InvalidErrorCode(pub u16);
