//! Utilities - logging and business-timezone helpers

pub mod logger;
pub mod time;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
