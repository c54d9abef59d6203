//! User Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// System role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Cashier,
    Waiter,
}

/// System account. Not tenant-scoped; a user may also appear as the
/// responsible party on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: Timestamp,
}
