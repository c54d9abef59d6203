//! Reporting engine
//!
//! Read-side projection over a state snapshot. Every run recomputes all
//! figures from the tenant-filtered collections; nothing is cached.
//! Dangling references (deleted menu items, unknown staff ids) are skipped
//! so a report can always be produced.

use std::collections::HashMap;

use chrono::{DateTime, Utc, Weekday};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use shared::models::{Order, OrderType, Reservation, ReservationStatus};
use tracing::debug;

use super::document::{
    DateRange, ItemSales, OrderTypeCounts, OrderTypeShare, RecentOrder, ReportDocument,
    StaffPerformance, Summary, TableUtilization,
};
use super::money::{average, line_amount, to_decimal, to_f64};
use super::{ReportWindow, WindowBounds};
use crate::core::Config;
use crate::store::AppState;
use crate::tenant::TenantView;

/// Length of the popular-items and staff rankings
pub const TOP_N: usize = 5;
/// Orders listed under recent activity
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Builds [`ReportDocument`]s for a fixed timezone / week convention
#[derive(Debug, Clone, Copy)]
pub struct ReportEngine {
    tz: Tz,
    week_start: Weekday,
}

impl ReportEngine {
    pub fn new(tz: Tz, week_start: Weekday) -> Self {
        Self { tz, week_start }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.timezone, config.week_starts_on)
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Build a report for the window containing the current instant
    pub fn build_now(
        &self,
        state: &AppState,
        window: ReportWindow,
        restaurant_id: Option<&str>,
    ) -> ReportDocument {
        self.build(state, window, restaurant_id, Utc::now())
    }

    /// Build a report for the window containing `now`
    ///
    /// `restaurant_id` scopes tenant collections; `None` aggregates over
    /// every restaurant.
    pub fn build(
        &self,
        state: &AppState,
        window: ReportWindow,
        restaurant_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> ReportDocument {
        let bounds = window.resolve(now, self.tz, self.week_start);
        let view = TenantView::new(state, restaurant_id);

        let orders: Vec<&Order> = view
            .orders
            .iter()
            .copied()
            .filter(|o| bounds.contains(o.created_at))
            .collect();
        let reservations: Vec<&Reservation> = view
            .reservations
            .iter()
            .copied()
            .filter(|r| bounds.contains(r.date))
            .collect();

        debug!(
            window = %window,
            restaurant_id = ?restaurant_id,
            start = bounds.start,
            end = bounds.end,
            orders = orders.len(),
            reservations = reservations.len(),
            "[Reports] Building report"
        );

        let order_types = order_type_counts(&orders);

        ReportDocument {
            period: window,
            date_range: date_range(&bounds),
            summary: summarize(&orders, &reservations),
            order_types,
            order_type_distribution: distribution(&order_types, orders.len()),
            popular_items: popular_items(&view, &orders),
            staff_performance: staff_performance(&view, &orders),
            table_utilization: table_utilization(&view, &orders),
            recent_activity: recent_activity(&orders),
        }
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new(chrono_tz::UTC, Weekday::Sun)
    }
}

/// Report for the current instant with UTC boundaries and Sunday weeks
pub fn build_report(
    state: &AppState,
    window: ReportWindow,
    restaurant_id: Option<&str>,
) -> ReportDocument {
    ReportEngine::default().build_now(state, window, restaurant_id)
}

fn date_range(bounds: &WindowBounds) -> DateRange {
    DateRange {
        start: bounds.start_date,
        end: bounds.end_date,
    }
}

fn summarize(orders: &[&Order], reservations: &[&Reservation]) -> Summary {
    let revenue: Decimal = orders.iter().map(|o| to_decimal(o.total)).sum();
    let walk_ins = orders
        .iter()
        .filter(|o| o.order_type != OrderType::DineIn)
        .count();
    let completed_reservations = reservations
        .iter()
        .filter(|r| r.status == ReservationStatus::Completed)
        .count();

    let total_revenue = to_f64(revenue);
    Summary {
        total_revenue,
        total_orders: orders.len(),
        average_order_value: average(total_revenue, orders.len()),
        total_customers: walk_ins + completed_reservations,
    }
}

fn order_type_counts(orders: &[&Order]) -> OrderTypeCounts {
    let mut counts = OrderTypeCounts::default();
    for order in orders {
        counts.bump(order.order_type);
    }
    counts
}

fn distribution(counts: &OrderTypeCounts, total_orders: usize) -> Vec<OrderTypeShare> {
    OrderType::ALL
        .into_iter()
        .map(|order_type| {
            let count = counts.get(order_type);
            let percentage = if total_orders > 0 {
                count as f64 / total_orders as f64 * 100.0
            } else {
                0.0
            };
            OrderTypeShare {
                order_type,
                count,
                percentage,
            }
        })
        .collect()
}

/// Insertion-ordered accumulator keyed by display name
struct Grouped<A> {
    index: HashMap<String, usize>,
    entries: Vec<(String, A)>,
}

impl<A: Default> Grouped<A> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn entry(&mut self, name: &str) -> &mut A {
        let slot = match self.index.get(name) {
            Some(&slot) => slot,
            None => {
                self.entries.push((name.to_string(), A::default()));
                self.index.insert(name.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot].1
    }

    /// Entries in first-seen order
    fn into_entries(self) -> Vec<(String, A)> {
        self.entries
    }
}

#[derive(Default)]
struct ItemTally {
    quantity: u64,
    revenue: Decimal,
}

#[derive(Default)]
struct StaffTally {
    orders: usize,
    revenue: Decimal,
}

fn popular_items(view: &TenantView<'_>, orders: &[&Order]) -> Vec<ItemSales> {
    let mut grouped: Grouped<ItemTally> = Grouped::new();
    for order in orders {
        for line in &order.items {
            let Some(menu_item) = view.menu_item(&line.menu_item_id) else {
                continue;
            };
            let tally = grouped.entry(&menu_item.name);
            tally.quantity += u64::from(line.quantity);
            tally.revenue += line_amount(line.price, line.quantity);
        }
    }

    let mut entries = grouped.into_entries();
    // Stable: ties keep first-seen order
    entries.sort_by(|a, b| b.1.quantity.cmp(&a.1.quantity));
    entries
        .into_iter()
        .take(TOP_N)
        .map(|(name, tally)| ItemSales {
            name,
            quantity: tally.quantity,
            revenue: to_f64(tally.revenue),
        })
        .collect()
}

fn staff_performance(view: &TenantView<'_>, orders: &[&Order]) -> Vec<StaffPerformance> {
    let mut grouped: Grouped<StaffTally> = Grouped::new();
    for order in orders {
        let Some(name) = order
            .staff_id
            .as_deref()
            .and_then(|id| view.responsible_name(id))
        else {
            continue;
        };
        let tally = grouped.entry(name);
        tally.orders += 1;
        tally.revenue += to_decimal(order.total);
    }

    let mut entries = grouped.into_entries();
    entries.sort_by(|a, b| b.1.revenue.cmp(&a.1.revenue));
    entries
        .into_iter()
        .take(TOP_N)
        .map(|(name, tally)| StaffPerformance {
            name,
            orders: tally.orders,
            revenue: to_f64(tally.revenue),
        })
        .collect()
}

fn table_utilization(view: &TenantView<'_>, orders: &[&Order]) -> Vec<TableUtilization> {
    let mut rows: Vec<(TableUtilization, Decimal)> = view
        .tables
        .iter()
        .map(|table| {
            let (count, revenue) = orders
                .iter()
                .filter(|o| o.table_id.as_deref() == Some(table.id.as_str()))
                .fold((0usize, Decimal::ZERO), |(n, sum), o| {
                    (n + 1, sum + to_decimal(o.total))
                });
            (
                TableUtilization {
                    table: table.number,
                    table_id: table.id.clone(),
                    orders: count,
                    revenue: to_f64(revenue),
                },
                revenue,
            )
        })
        .collect();

    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.into_iter().map(|(row, _)| row).collect()
}

fn recent_activity(orders: &[&Order]) -> Vec<RecentOrder> {
    orders
        .iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(|o| RecentOrder {
            id: o.id.clone(),
            order_number: o.order_number.clone(),
            order_type: o.order_type,
            status: o.status,
            total: o.total,
            created_at: o.created_at,
        })
        .collect()
}
