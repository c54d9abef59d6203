//! Kitchen Order Ticket Model

use serde::{Deserialize, Serialize};

use super::{MenuItem, Order};
use crate::types::Timestamp;

/// Kitchen-side preparation state, distinct from the order's own status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KotStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Served,
}

/// Ticket line as the kitchen sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KotItem {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Kitchen order ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kot {
    pub id: String,
    pub restaurant_id: String,
    pub order_id: String,
    pub kot_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(default)]
    pub items: Vec<KotItem>,
    #[serde(default)]
    pub status: KotStatus,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Kot {
    /// Derive a pending ticket from an order
    ///
    /// Item names are resolved against `menu_items`; lines whose menu item
    /// no longer exists are left off the ticket.
    pub fn from_order(
        id: impl Into<String>,
        kot_number: impl Into<String>,
        order: &Order,
        menu_items: &[MenuItem],
        now: Timestamp,
    ) -> Self {
        let items = order
            .items
            .iter()
            .filter_map(|line| {
                menu_items
                    .iter()
                    .find(|m| m.id == line.menu_item_id)
                    .map(|m| KotItem {
                        menu_item_id: line.menu_item_id.clone(),
                        name: m.name.clone(),
                        quantity: line.quantity,
                        notes: line.notes.clone(),
                    })
            })
            .collect();

        Self {
            id: id.into(),
            restaurant_id: order.restaurant_id.clone(),
            order_id: order.id.clone(),
            kot_number: kot_number.into(),
            table_id: order.table_id.clone(),
            items,
            status: KotStatus::Pending,
            created_at: now,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderItem, OrderStatus, OrderType};

    fn menu_item(id: &str, name: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            restaurant_id: "r1".to_string(),
            name: name.to_string(),
            description: String::new(),
            category: "Mains".to_string(),
            price: 10.0,
            is_available: true,
            preparation_time: Some(12),
        }
    }

    #[test]
    fn test_from_order_resolves_names_and_drops_dangling_lines() {
        let order = Order {
            id: "o1".to_string(),
            restaurant_id: "r1".to_string(),
            order_number: "ORD-001".to_string(),
            order_type: OrderType::DineIn,
            status: OrderStatus::Pending,
            items: vec![
                OrderItem {
                    menu_item_id: "m1".to_string(),
                    quantity: 2,
                    price: 10.0,
                    notes: Some("no onions".to_string()),
                },
                OrderItem {
                    menu_item_id: "gone".to_string(),
                    quantity: 1,
                    price: 3.0,
                    notes: None,
                },
            ],
            total: 23.0,
            table_id: Some("t1".to_string()),
            staff_id: None,
            customer_name: None,
            created_at: 1,
            updated_at: None,
        };

        let kot = Kot::from_order("k1", "KOT-001", &order, &[menu_item("m1", "Burger")], 5);

        assert_eq!(kot.order_id, "o1");
        assert_eq!(kot.restaurant_id, "r1");
        assert_eq!(kot.table_id.as_deref(), Some("t1"));
        assert_eq!(kot.status, KotStatus::Pending);
        assert_eq!(kot.items.len(), 1);
        assert_eq!(kot.items[0].name, "Burger");
        assert_eq!(kot.items[0].notes.as_deref(), Some("no onions"));
        assert_eq!(kot.created_at, 5);
    }
}
