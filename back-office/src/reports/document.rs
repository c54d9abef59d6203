//! Report document
//!
//! The serializable result of a report run. It is also the export format;
//! nothing ever reads it back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::Timestamp;
use shared::models::{OrderStatus, OrderType};

use super::ReportWindow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub period: ReportWindow,
    pub date_range: DateRange,
    pub summary: Summary,
    pub order_types: OrderTypeCounts,
    pub order_type_distribution: Vec<OrderTypeShare>,
    pub popular_items: Vec<ItemSales>,
    pub staff_performance: Vec<StaffPerformance>,
    pub table_utilization: Vec<TableUtilization>,
    pub recent_activity: Vec<RecentOrder>,
}

/// Calendar dates covered, both inclusive (`YYYY-MM-DD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_revenue: f64,
    pub total_orders: usize,
    pub average_order_value: f64,
    /// Non-dine-in orders plus completed reservations, not deduplicated
    pub total_customers: usize,
}

/// Order count per type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTypeCounts {
    #[serde(rename = "dine-in")]
    pub dine_in: usize,
    pub takeaway: usize,
    pub delivery: usize,
}

impl OrderTypeCounts {
    pub fn get(&self, order_type: OrderType) -> usize {
        match order_type {
            OrderType::DineIn => self.dine_in,
            OrderType::Takeaway => self.takeaway,
            OrderType::Delivery => self.delivery,
        }
    }

    pub(crate) fn bump(&mut self, order_type: OrderType) {
        match order_type {
            OrderType::DineIn => self.dine_in += 1,
            OrderType::Takeaway => self.takeaway += 1,
            OrderType::Delivery => self.delivery += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.dine_in + self.takeaway + self.delivery
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTypeShare {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub count: usize,
    /// 0..=100, zero when there are no orders
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSales {
    pub name: String,
    pub quantity: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffPerformance {
    pub name: String,
    pub orders: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableUtilization {
    /// Table number
    pub table: u32,
    pub table_id: String,
    pub orders: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: String,
    pub order_number: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub total: f64,
    pub created_at: Timestamp,
}
