//! Restaurant Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Restaurant entity (tenant root)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}
