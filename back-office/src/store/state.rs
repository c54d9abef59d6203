//! Application state aggregate

use serde::{Deserialize, Deserializer, Serialize};
use shared::models::{
    DiningTable, Kot, MenuItem, Order, Reservation, Restaurant, Staff, User,
};

/// Everything the dashboard knows, across all tenants
///
/// Collections hold the union of every restaurant's records; tenant scoping
/// happens on read (see [`crate::tenant`]). The three session pointers are
/// copies of records that live in the collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppState {
    pub current_user: Option<User>,
    pub current_restaurant: Option<Restaurant>,
    pub restaurants: Vec<Restaurant>,
    pub users: Vec<User>,
    pub staff: Vec<Staff>,
    pub tables: Vec<DiningTable>,
    pub menu_items: Vec<MenuItem>,
    pub reservations: Vec<Reservation>,
    pub orders: Vec<Order>,
    pub kots: Vec<Kot>,
    pub selected_table: Option<DiningTable>,
}

impl AppState {
    /// Id of the session's restaurant, if one is selected
    pub fn current_restaurant_id(&self) -> Option<&str> {
        self.current_restaurant.as_ref().map(|r| r.id.as_str())
    }
}

/// Payload of `LOAD_INITIAL_DATA`, merged shallowly over the current state
///
/// Absent fields keep their current value. A session pointer sent as an
/// explicit `null` is cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitialData {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub current_user: Option<Option<User>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub current_restaurant: Option<Option<Restaurant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<Restaurant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<Vec<Staff>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<DiningTable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_items: Option<Vec<MenuItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservations: Option<Vec<Reservation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kots: Option<Vec<Kot>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub selected_table: Option<Option<DiningTable>>,
}

/// A field that is present on the wire, possibly `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl InitialData {
    /// Overwrite every field of `state` that this payload carries
    pub fn merge_into(self, state: &mut AppState) {
        overwrite(&mut state.current_user, self.current_user);
        overwrite(&mut state.current_restaurant, self.current_restaurant);
        overwrite(&mut state.restaurants, self.restaurants);
        overwrite(&mut state.users, self.users);
        overwrite(&mut state.staff, self.staff);
        overwrite(&mut state.tables, self.tables);
        overwrite(&mut state.menu_items, self.menu_items);
        overwrite(&mut state.reservations, self.reservations);
        overwrite(&mut state.orders, self.orders);
        overwrite(&mut state.kots, self.kots);
        overwrite(&mut state.selected_table, self.selected_table);
    }
}

/// Full bundle: every field present
impl From<AppState> for InitialData {
    fn from(state: AppState) -> Self {
        Self {
            current_user: Some(state.current_user),
            current_restaurant: Some(state.current_restaurant),
            restaurants: Some(state.restaurants),
            users: Some(state.users),
            staff: Some(state.staff),
            tables: Some(state.tables),
            menu_items: Some(state.menu_items),
            reservations: Some(state.reservations),
            orders: Some(state.orders),
            kots: Some(state.kots),
            selected_table: Some(state.selected_table),
        }
    }
}
