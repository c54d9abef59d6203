//! Record builders for unit tests

use shared::models::{
    DiningTable, MenuItem, Order, OrderItem, OrderStatus, OrderType, Reservation,
    ReservationStatus, Restaurant, Staff, StaffRole, TableStatus, User, UserRole,
};

pub fn restaurant(id: &str) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: format!("Restaurant {}", id),
        address: "1 Main St".to_string(),
        phone: "555-0100".to_string(),
        email: None,
        cuisine: None,
        is_active: true,
        created_at: 0,
    }
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        role: UserRole::Manager,
        is_active: true,
        created_at: 0,
    }
}

pub fn staff(id: &str, restaurant_id: &str, name: &str) -> Staff {
    Staff {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        name: name.to_string(),
        role: StaffRole::Waiter,
        phone: "555-0101".to_string(),
        email: None,
        salary: None,
        is_active: true,
        hired_at: 0,
    }
}

pub fn table(id: &str, restaurant_id: &str, number: u32) -> DiningTable {
    DiningTable {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        number,
        capacity: 4,
        status: TableStatus::Available,
        location: None,
    }
}

pub fn menu_item(id: &str, restaurant_id: &str, name: &str, price: f64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category: "General".to_string(),
        price,
        is_available: true,
        preparation_time: None,
    }
}

pub fn line(menu_item_id: &str, quantity: u32, price: f64) -> OrderItem {
    OrderItem {
        menu_item_id: menu_item_id.to_string(),
        quantity,
        price,
        notes: None,
    }
}

pub fn order(
    id: &str,
    restaurant_id: &str,
    order_type: OrderType,
    total: f64,
    created_at: i64,
) -> Order {
    Order {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        order_number: format!("ORD-{}", id),
        order_type,
        status: OrderStatus::Pending,
        items: Vec::new(),
        total,
        table_id: None,
        staff_id: None,
        customer_name: None,
        created_at,
        updated_at: None,
    }
}

pub fn reservation(
    id: &str,
    restaurant_id: &str,
    date: i64,
    status: ReservationStatus,
) -> Reservation {
    Reservation {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        customer_name: "Guest".to_string(),
        customer_phone: "555-0199".to_string(),
        party_size: 2,
        date,
        table_id: None,
        status,
        notes: None,
    }
}
