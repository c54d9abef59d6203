//! Order Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// How the order leaves the kitchen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    DineIn,
    Takeaway,
    Delivery,
}

impl OrderType {
    /// All order types in display order
    pub const ALL: [OrderType; 3] = [OrderType::DineIn, OrderType::Takeaway, OrderType::Delivery];

    /// Wire label (`dine-in`, `takeaway`, `delivery`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => "dine-in",
            Self::Takeaway => "takeaway",
            Self::Delivery => "delivery",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Front-of-house order status
///
/// `pending -> preparing -> ready -> served | delivered`, or `cancelled`
/// from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Served,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Served | Self::Delivered | Self::Cancelled)
    }

    /// Next status in the regular flow, `None` once terminal
    ///
    /// Delivery orders finish as `delivered`, everything else as `served`.
    pub fn next(&self, order_type: OrderType) -> Option<OrderStatus> {
        match self {
            Self::Pending => Some(Self::Preparing),
            Self::Preparing => Some(Self::Ready),
            Self::Ready => match order_type {
                OrderType::Delivery => Some(Self::Delivered),
                OrderType::DineIn | OrderType::Takeaway => Some(Self::Served),
            },
            Self::Served | Self::Delivered | Self::Cancelled => None,
        }
    }
}

/// Order line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Menu item reference (may dangle after the menu item is deleted)
    pub menu_item_id: String,
    pub quantity: u32,
    /// Unit price captured when the order was taken
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderItem {
    /// Line total using the captured unit price
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Restaurant-scoped order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub restaurant_id: String,
    pub order_number: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Total in currency unit
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    /// Responsible party: a staff id or a user id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Order {
    /// Sum of line totals (independent of the stored `total`)
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_wire_format() {
        assert_eq!(serde_json::to_string(&OrderType::DineIn).unwrap(), "\"dine-in\"");
        let t: OrderType = serde_json::from_str("\"takeaway\"").unwrap();
        assert_eq!(t, OrderType::Takeaway);
        assert_eq!(OrderType::Delivery.to_string(), "delivery");
    }

    #[test]
    fn test_status_flow() {
        assert_eq!(OrderStatus::Pending.next(OrderType::DineIn), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Ready.next(OrderType::DineIn), Some(OrderStatus::Served));
        assert_eq!(OrderStatus::Ready.next(OrderType::Delivery), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Cancelled.next(OrderType::Takeaway), None);
        assert!(OrderStatus::Served.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
    }

    #[test]
    fn test_order_json_uses_type_key() {
        let json = r#"{
            "id": "o1",
            "restaurantId": "r1",
            "orderNumber": "ORD-001",
            "type": "delivery",
            "status": "preparing",
            "items": [{"menuItemId": "m1", "quantity": 2, "price": 4.5}],
            "total": 9.0,
            "createdAt": 1700000000000
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_type, OrderType::Delivery);
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.items_total(), 9.0);
        assert!(order.staff_id.is_none());
    }
}
