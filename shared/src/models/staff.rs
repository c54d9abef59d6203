//! Staff Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Position held by a staff member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Manager,
    Chef,
    Waiter,
    Cashier,
    Host,
}

/// Restaurant-scoped employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub role: StaffRole,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Monthly salary in currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    pub is_active: bool,
    pub hired_at: Timestamp,
}
