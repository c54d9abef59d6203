//! State transition function
//!
//! `reduce` is total and pure: it consumes the previous state, applies one
//! action and returns the next state. It never fails; an update or delete
//! aimed at a missing id leaves the collection untouched.

use tracing::debug;

use super::collection::{append, clear_pointer, refresh_pointer, remove_by_id, replace_by_id};
use super::{Action, AppState};

/// Apply one action to `state`
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    let tag = action.tag();
    let changed = match action {
        Action::LoadInitialData(payload) => {
            payload.merge_into(&mut state);
            true
        }

        Action::SetUser(user) => {
            state.current_user = user;
            true
        }
        Action::SetCurrentRestaurant(restaurant) => {
            state.current_restaurant = restaurant;
            true
        }
        Action::SelectTable(table) => {
            state.selected_table = table;
            true
        }

        Action::AddRestaurant(restaurant) => {
            append(&mut state.restaurants, restaurant);
            true
        }
        Action::UpdateRestaurant(restaurant) => {
            refresh_pointer(&mut state.current_restaurant, &restaurant);
            replace_by_id(&mut state.restaurants, &restaurant)
        }
        Action::DeleteRestaurant(id) => {
            // Forces re-selection when the active restaurant disappears
            clear_pointer(&mut state.current_restaurant, &id);
            remove_by_id(&mut state.restaurants, &id)
        }

        Action::AddUser(user) => {
            append(&mut state.users, user);
            true
        }
        Action::UpdateUser(user) => {
            refresh_pointer(&mut state.current_user, &user);
            replace_by_id(&mut state.users, &user)
        }
        // Leaves current_user in place, unlike DELETE_RESTAURANT
        Action::DeleteUser(id) => remove_by_id(&mut state.users, &id),

        Action::AddStaff(member) => {
            append(&mut state.staff, member);
            true
        }
        Action::UpdateStaff(member) => replace_by_id(&mut state.staff, &member),
        Action::DeleteStaff(id) => remove_by_id(&mut state.staff, &id),

        Action::AddTable(table) => {
            append(&mut state.tables, table);
            true
        }
        Action::UpdateTable(table) => replace_by_id(&mut state.tables, &table),
        Action::DeleteTable(id) => remove_by_id(&mut state.tables, &id),

        Action::AddMenuItem(item) => {
            append(&mut state.menu_items, item);
            true
        }
        Action::UpdateMenuItem(item) => replace_by_id(&mut state.menu_items, &item),
        Action::DeleteMenuItem(id) => remove_by_id(&mut state.menu_items, &id),

        Action::AddReservation(reservation) => {
            append(&mut state.reservations, reservation);
            true
        }
        Action::UpdateReservation(reservation) => {
            replace_by_id(&mut state.reservations, &reservation)
        }
        Action::DeleteReservation(id) => remove_by_id(&mut state.reservations, &id),

        Action::AddOrder(order) => {
            append(&mut state.orders, order);
            true
        }
        Action::UpdateOrder(order) => replace_by_id(&mut state.orders, &order),
        Action::DeleteOrder(id) => remove_by_id(&mut state.orders, &id),

        Action::AddKot(kot) => {
            append(&mut state.kots, kot);
            true
        }
        Action::UpdateKot(kot) => replace_by_id(&mut state.kots, &kot),
        Action::DeleteKot(id) => remove_by_id(&mut state.kots, &id),
    };

    if changed {
        debug!(action = tag, "[Reducer] Applied");
    } else {
        debug!(action = tag, "[Reducer] No matching record, state unchanged");
    }

    state
}

/// Borrowing form of [`reduce`]; the input snapshot is left as it was
pub fn transition(state: &AppState, action: Action) -> AppState {
    reduce(state.clone(), action)
}
