//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Front-of-house state of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Cleaning,
}

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: String,
    pub restaurant_id: String,
    /// Number shown to guests and in reports
    pub number: u32,
    pub capacity: u32,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
