//! Demo data bundle, loaded through `LOAD_INITIAL_DATA` on startup
//!
//! Restaurants:
//!   rest-1: Bella Vista (Italian)
//!   rest-2: Sakura House (Japanese)
//!
//! Orders and reservations are placed relative to `now`.

use shared::Timestamp;
use shared::models::{
    DiningTable, Kot, MenuItem, Order, OrderItem, OrderStatus, OrderType, Reservation,
    ReservationStatus, Restaurant, Staff, StaffRole, TableStatus, User, UserRole,
};

use crate::store::AppState;

const MINUTE: i64 = 60_000;
const DAY: i64 = 24 * 60 * MINUTE;

fn restaurant(id: &str, name: &str, address: &str, cuisine: &str, now: Timestamp) -> Restaurant {
    Restaurant {
        id: id.into(),
        name: name.into(),
        address: address.into(),
        phone: "+1 555 0100".into(),
        email: Some(format!("{}@example.com", id)),
        cuisine: Some(cuisine.into()),
        is_active: true,
        created_at: now - 365 * DAY,
    }
}

fn user(id: &str, name: &str, email: &str, role: UserRole, now: Timestamp) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        is_active: true,
        created_at: now - 300 * DAY,
    }
}

fn staff(id: &str, rid: &str, name: &str, role: StaffRole, salary: f64, now: Timestamp) -> Staff {
    Staff {
        id: id.into(),
        restaurant_id: rid.into(),
        name: name.into(),
        role,
        phone: "+1 555 0142".into(),
        email: None,
        salary: Some(salary),
        is_active: true,
        hired_at: now - 200 * DAY,
    }
}

fn table(id: &str, rid: &str, number: u32, capacity: u32, location: &str) -> DiningTable {
    DiningTable {
        id: id.into(),
        restaurant_id: rid.into(),
        number,
        capacity,
        status: TableStatus::Available,
        location: Some(location.into()),
    }
}

fn dish(id: &str, rid: &str, name: &str, category: &str, price: f64, prep: u32) -> MenuItem {
    MenuItem {
        id: id.into(),
        restaurant_id: rid.into(),
        name: name.into(),
        description: String::new(),
        category: category.into(),
        price,
        is_available: true,
        preparation_time: Some(prep),
    }
}

/// Order whose total is the sum of its lines
#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    rid: &str,
    number: &str,
    order_type: OrderType,
    status: OrderStatus,
    items: Vec<OrderItem>,
    table_id: Option<&str>,
    staff_id: Option<&str>,
    created_at: Timestamp,
) -> Order {
    let mut order = Order {
        id: id.into(),
        restaurant_id: rid.into(),
        order_number: number.into(),
        order_type,
        status,
        items,
        total: 0.0,
        table_id: table_id.map(Into::into),
        staff_id: staff_id.map(Into::into),
        customer_name: None,
        created_at,
        updated_at: None,
    };
    order.total = order.items_total();
    order
}

fn line(menu_item: &MenuItem, quantity: u32) -> OrderItem {
    OrderItem {
        menu_item_id: menu_item.id.clone(),
        quantity,
        price: menu_item.price,
        notes: None,
    }
}

/// Lines for `(menu item id, quantity)` pairs, priced from the menu
fn lines(menu_items: &[MenuItem], picks: &[(&str, u32)]) -> Vec<OrderItem> {
    picks
        .iter()
        .filter_map(|&(id, quantity)| {
            menu_items
                .iter()
                .find(|m| m.id == id)
                .map(|m| line(m, quantity))
        })
        .collect()
}

fn booking(
    id: &str,
    rid: &str,
    customer: &str,
    party_size: u32,
    date: Timestamp,
    table_id: Option<&str>,
    status: ReservationStatus,
) -> Reservation {
    Reservation {
        id: id.into(),
        restaurant_id: rid.into(),
        customer_name: customer.into(),
        customer_phone: "+1 555 0177".into(),
        party_size,
        date,
        table_id: table_id.map(Into::into),
        status,
        notes: None,
    }
}

/// Complete demo state for two restaurants, with no session selected
pub fn demo_bundle(now: Timestamp) -> AppState {
    let restaurants = vec![
        restaurant("rest-1", "Bella Vista", "12 Harbour Road", "Italian", now),
        restaurant("rest-2", "Sakura House", "8 Cherry Lane", "Japanese", now),
    ];

    let users = vec![
        user("user-1", "Alex Morgan", "admin@example.com", UserRole::Admin, now),
        user("user-2", "Sam Rivera", "manager@example.com", UserRole::Manager, now),
    ];

    let staff = vec![
        staff("staff-1", "rest-1", "Marco Rossi", StaffRole::Chef, 4200.0, now),
        staff("staff-2", "rest-1", "Giulia Bianchi", StaffRole::Waiter, 2400.0, now),
        staff("staff-3", "rest-1", "Luca Ferri", StaffRole::Cashier, 2300.0, now),
        staff("staff-4", "rest-2", "Yuki Tanaka", StaffRole::Chef, 4100.0, now),
        staff("staff-5", "rest-2", "Hana Sato", StaffRole::Host, 2200.0, now),
    ];

    let tables = vec![
        table("table-1", "rest-1", 1, 2, "Window"),
        table("table-2", "rest-1", 2, 4, "Main hall"),
        table("table-3", "rest-1", 3, 6, "Terrace"),
        table("table-4", "rest-2", 1, 4, "Counter"),
        table("table-5", "rest-2", 2, 8, "Tatami room"),
    ];

    let menu_items = vec![
        dish("menu-1", "rest-1", "Margherita Pizza", "Pizza", 12.5, 15),
        dish("menu-2", "rest-1", "Spaghetti Carbonara", "Pasta", 14.0, 12),
        dish("menu-3", "rest-1", "Tiramisu", "Dessert", 6.5, 5),
        dish("menu-4", "rest-1", "Espresso", "Drinks", 2.5, 2),
        dish("menu-5", "rest-2", "Salmon Nigiri", "Sushi", 9.0, 10),
        dish("menu-6", "rest-2", "Tonkotsu Ramen", "Noodles", 13.5, 20),
        dish("menu-7", "rest-2", "Green Tea", "Drinks", 3.0, 2),
    ];

    let orders = vec![
        order(
            "order-1",
            "rest-1",
            "ORD-001",
            OrderType::DineIn,
            OrderStatus::Served,
            lines(&menu_items, &[("menu-1", 2), ("menu-4", 2)]),
            Some("table-2"),
            Some("staff-2"),
            now - 90 * MINUTE,
        ),
        order(
            "order-2",
            "rest-1",
            "ORD-002",
            OrderType::Takeaway,
            OrderStatus::Ready,
            lines(&menu_items, &[("menu-2", 1), ("menu-3", 1)]),
            None,
            Some("staff-3"),
            now - 45 * MINUTE,
        ),
        order(
            "order-3",
            "rest-1",
            "ORD-003",
            OrderType::Delivery,
            OrderStatus::Preparing,
            lines(&menu_items, &[("menu-1", 1), ("menu-2", 2)]),
            None,
            Some("user-2"),
            now - 20 * MINUTE,
        ),
        order(
            "order-4",
            "rest-1",
            "ORD-004",
            OrderType::DineIn,
            OrderStatus::Pending,
            lines(&menu_items, &[("menu-3", 3), ("menu-4", 3)]),
            Some("table-3"),
            Some("staff-2"),
            now - 5 * MINUTE,
        ),
        order(
            "order-5",
            "rest-2",
            "ORD-001",
            OrderType::DineIn,
            OrderStatus::Served,
            lines(&menu_items, &[("menu-5", 4), ("menu-7", 2)]),
            Some("table-4"),
            Some("staff-5"),
            now - 60 * MINUTE,
        ),
        order(
            "order-6",
            "rest-2",
            "ORD-002",
            OrderType::Takeaway,
            OrderStatus::Delivered,
            lines(&menu_items, &[("menu-6", 2)]),
            None,
            None,
            now - 2 * DAY,
        ),
    ];

    let reservations = vec![
        booking("res-1", "rest-1", "Maria Lopez", 4, now - 2 * 60 * MINUTE, Some("table-2"), ReservationStatus::Completed),
        booking("res-2", "rest-1", "John Smith", 2, now + 3 * 60 * MINUTE, Some("table-1"), ReservationStatus::Confirmed),
        booking("res-3", "rest-2", "Kenji Mori", 6, now + DAY, Some("table-5"), ReservationStatus::Pending),
    ];

    let kots = orders
        .iter()
        .filter(|o| !o.status.is_terminal() && o.status != OrderStatus::Ready)
        .enumerate()
        .map(|(i, o)| {
            Kot::from_order(
                format!("kot-{}", i + 1),
                format!("KOT-{:03}", i + 1),
                o,
                &menu_items,
                o.created_at,
            )
        })
        .collect();

    AppState {
        restaurants,
        users,
        staff,
        tables,
        menu_items,
        reservations,
        orders,
        kots,
        ..Default::default()
    }
}
