//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Sellable item on a restaurant's menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Current price in currency unit. Order lines keep their own copy.
    pub price: f64,
    pub is_available: bool,
    /// Preparation time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<u32>,
}
