//! Shared types for the restaurant back office
//!
//! Domain records, error types and small utilities used by the store, the
//! reporting engine and any front end that talks to them.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use types::Timestamp;
