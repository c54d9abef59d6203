//! Unified error codes for the back-office core
//!
//! Error codes are organized by category:
//! - 3xxx: Tenant errors
//! - 4xxx: Order / report errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the dashboard front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 3xxx: Tenant ====================
    /// No restaurant selected for the session
    RestaurantNotSelected = 3001,

    // ==================== 4xxx: Order / Report ====================
    /// Action tag is known but its payload is malformed
    InvalidAction = 4001,
    /// Report window label is not one of today / week / month
    InvalidReportWindow = 4101,
    /// Report export could not be written
    ExportFailed = 4103,

    // ==================== 9xxx: System ====================
    /// Store handle used outside the lifetime of its provider
    StoreNotProvided = 9101,
    /// Configuration value is invalid
    ConfigInvalid = 9201,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::RestaurantNotSelected => "No restaurant selected",
            Self::InvalidAction => "Invalid action payload",
            Self::InvalidReportWindow => "Invalid report window",
            Self::ExportFailed => "Report export failed",
            Self::StoreNotProvided => "Store used outside of its provider",
            Self::ConfigInvalid => "Invalid configuration",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a u16 does not map to any [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            3001 => Ok(Self::RestaurantNotSelected),
            4001 => Ok(Self::InvalidAction),
            4101 => Ok(Self::InvalidReportWindow),
            4103 => Ok(Self::ExportFailed),
            9101 => Ok(Self::StoreNotProvided),
            9201 => Ok(Self::ConfigInvalid),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
