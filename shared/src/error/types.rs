//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// The store and the reporting engine are total, so this only surfaces at
/// the edges: decoding raw actions, using a store handle after its provider
/// is gone, resolving configuration, writing exports and running the
/// binary without a selected restaurant.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// An operation needs a selected restaurant and the session has none
    pub fn restaurant_not_selected() -> Self {
        Self::new(ErrorCode::RestaurantNotSelected)
    }

    /// A known action tag carried a payload that does not decode
    pub fn invalid_action(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        let tag = tag.into();
        Self::with_message(
            ErrorCode::InvalidAction,
            format!("Invalid payload for {}: {}", tag, reason.into()),
        )
        .with_detail("tag", tag)
    }

    /// The store handle outlived the store that provided it
    pub fn store_not_provided() -> Self {
        Self::new(ErrorCode::StoreNotProvided)
    }

    /// Create a configuration error for the given variable
    pub fn config(key: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigInvalid, msg).with_detail("key", key.into())
    }

    /// Create an export failure
    pub fn export_failed(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ExportFailed, msg)
    }
}

/// Result type using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::restaurant_not_selected();
        assert_eq!(err.code, ErrorCode::RestaurantNotSelected);
        assert_eq!(err.message, "No restaurant selected");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::config("EXPORT_DIR", "Not a directory")
            .with_detail("value", "/dev/null");

        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        let details = err.details.unwrap();
        assert_eq!(details.get("key").unwrap(), "EXPORT_DIR");
        assert_eq!(details.get("value").unwrap(), "/dev/null");
    }

    #[test]
    fn test_invalid_action_carries_tag() {
        let err = AppError::invalid_action("ADD_ORDER", "missing field `id`");
        assert_eq!(err.code, ErrorCode::InvalidAction);
        assert!(err.message.contains("ADD_ORDER"));
        assert_eq!(err.details.unwrap().get("tag").unwrap(), "ADD_ORDER");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::store_not_provided();
        assert_eq!(err.to_string(), "Store used outside of its provider");
    }
}
