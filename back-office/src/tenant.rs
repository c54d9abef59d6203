//! Tenant filter
//!
//! Restricts tenant-scoped collections to one restaurant. Restaurants and
//! users are global and pass through untouched. With no restaurant selected
//! the view is the whole state.

use shared::models::{
    DiningTable, Kot, MenuItem, Order, Reservation, Restaurant, Staff, TenantScoped, User,
};

use crate::store::AppState;

fn scoped<'a, T: TenantScoped>(items: &'a [T], restaurant_id: Option<&str>) -> Vec<&'a T> {
    match restaurant_id {
        Some(id) => items.iter().filter(|item| item.restaurant_id() == id).collect(),
        None => items.iter().collect(),
    }
}

fn owned<T: Clone>(items: &[&T]) -> Vec<T> {
    items.iter().map(|item| (*item).clone()).collect()
}

/// Borrowed, tenant-restricted view over an [`AppState`]
#[derive(Debug, Clone)]
pub struct TenantView<'a> {
    pub restaurant_id: Option<&'a str>,
    pub restaurants: &'a [Restaurant],
    pub users: &'a [User],
    pub staff: Vec<&'a Staff>,
    pub tables: Vec<&'a DiningTable>,
    pub menu_items: Vec<&'a MenuItem>,
    pub reservations: Vec<&'a Reservation>,
    pub orders: Vec<&'a Order>,
    pub kots: Vec<&'a Kot>,
}

impl<'a> TenantView<'a> {
    /// View scoped to `restaurant_id`, or unscoped for `None`
    pub fn new(state: &'a AppState, restaurant_id: Option<&'a str>) -> Self {
        Self {
            restaurant_id,
            restaurants: &state.restaurants,
            users: &state.users,
            staff: scoped(&state.staff, restaurant_id),
            tables: scoped(&state.tables, restaurant_id),
            menu_items: scoped(&state.menu_items, restaurant_id),
            reservations: scoped(&state.reservations, restaurant_id),
            orders: scoped(&state.orders, restaurant_id),
            kots: scoped(&state.kots, restaurant_id),
        }
    }

    /// View scoped to the session's current restaurant
    pub fn current(state: &'a AppState) -> Self {
        Self::new(state, state.current_restaurant_id())
    }

    pub fn menu_item(&self, id: &str) -> Option<&'a MenuItem> {
        self.menu_items.iter().copied().find(|m| m.id == id)
    }

    pub fn table(&self, id: &str) -> Option<&'a DiningTable> {
        self.tables.iter().copied().find(|t| t.id == id)
    }

    /// Name of whoever is responsible for an order
    ///
    /// Staff of this tenant are checked first, then global user accounts.
    pub fn responsible_name(&self, staff_id: &str) -> Option<&'a str> {
        self.staff
            .iter()
            .copied()
            .find(|s| s.id == staff_id)
            .map(|s| s.name.as_str())
            .or_else(|| {
                self.users
                    .iter()
                    .find(|u| u.id == staff_id)
                    .map(|u| u.name.as_str())
            })
    }
}

/// Owned copy of `state` with tenant collections restricted to the
/// current restaurant; session pointers are carried over as they are
pub fn filter_for_current(state: &AppState) -> AppState {
    let view = TenantView::current(state);
    AppState {
        current_user: state.current_user.clone(),
        current_restaurant: state.current_restaurant.clone(),
        restaurants: state.restaurants.clone(),
        users: state.users.clone(),
        staff: owned(&view.staff),
        tables: owned(&view.tables),
        menu_items: owned(&view.menu_items),
        reservations: owned(&view.reservations),
        orders: owned(&view.orders),
        kots: owned(&view.kots),
        selected_table: state.selected_table.clone(),
    }
}
