use std::sync::Arc;

use back_office::reports::{ReportEngine, ReportWindow, export_file_name, write_export};
use back_office::session::{self, Route, Screen, SessionPhase};
use back_office::store::{Action, AppState, Store};
use back_office::tenant::filter_for_current;
use back_office::{ErrorCode, seed};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

/// 2024-05-15 12:00:00 UTC
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
}

fn loaded_store() -> Store {
    let store = Store::new();
    store.dispatch(Action::LoadInitialData(Box::new(
        seed::demo_bundle(now().timestamp_millis()).into(),
    )));
    store
}

fn sign_in(store: &Store, restaurant_id: &str) {
    let state = store.snapshot();
    let user = state.users.first().cloned().expect("demo user");
    let restaurant = state
        .restaurants
        .iter()
        .find(|r| r.id == restaurant_id)
        .cloned()
        .expect("demo restaurant");
    store.dispatch(Action::SetUser(Some(user)));
    store.dispatch(Action::SetCurrentRestaurant(Some(restaurant)));
}

#[test]
fn test_session_gate_follows_dispatches() {
    let store = loaded_store();

    // 1. Nobody signed in
    assert_eq!(session::resolve(&store.snapshot(), "/orders"), Screen::Login);

    // 2. Signed in, no restaurant
    let user = store.snapshot().users[0].clone();
    store.dispatch(Action::SetUser(Some(user)));
    assert_eq!(
        session::resolve(&store.snapshot(), "/orders"),
        Screen::RestaurantSelector
    );

    // 3. Restaurant chosen
    let restaurant = store.snapshot().restaurants[0].clone();
    store.dispatch(Action::SetCurrentRestaurant(Some(restaurant.clone())));
    let state = store.snapshot();
    assert_eq!(SessionPhase::of(&state), SessionPhase::Active);
    assert_eq!(session::resolve(&state, "/orders"), Screen::Page(Route::Orders));
    assert_eq!(session::resolve(&state, "/"), Screen::Page(Route::Dashboard));
    assert_eq!(session::resolve(&state, "/nowhere"), Screen::NotFound);

    // 4. Deleting the current restaurant sends the user back to the selector
    store.dispatch(Action::DeleteRestaurant(restaurant.id));
    assert_eq!(
        session::resolve(&store.snapshot(), "/orders"),
        Screen::RestaurantSelector
    );
}

#[test]
fn test_json_actions_from_the_wire() {
    let store = loaded_store();
    let mut rx = store.subscribe();
    let before = store.snapshot();

    store
        .dispatch_json(json!({
            "type": "ADD_TABLE",
            "payload": {
                "id": "table-9",
                "restaurantId": "rest-1",
                "number": 9,
                "capacity": 2,
                "status": "available"
            }
        }))
        .expect("valid action");
    assert!(rx.has_changed().unwrap());
    let after = rx.borrow_and_update().clone();
    assert_eq!(after.tables.len(), before.tables.len() + 1);
    assert!(Arc::ptr_eq(&after, &store.snapshot()));

    // Unknown tags are ignored
    store
        .dispatch_json(json!({ "type": "CLOSE_SHIFT", "payload": {} }))
        .expect("ignored");
    assert_eq!(store.snapshot().tables.len(), after.tables.len());

    // Known tag, bad payload
    let err = store
        .dispatch_json(json!({ "type": "ADD_ORDER", "payload": { "id": 7 } }))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidAction);
    assert_eq!(store.snapshot().orders.len(), before.orders.len());
}

#[test]
fn test_partial_initial_data_merges_over_demo() {
    let store = loaded_store();
    sign_in(&store, "rest-1");
    let before = store.snapshot();

    store
        .dispatch_json(json!({ "type": "LOAD_INITIAL_DATA", "payload": { "orders": [] } }))
        .expect("valid action");

    let after = store.snapshot();
    assert!(after.orders.is_empty());
    assert_eq!(after.restaurants.len(), 2);
    assert_eq!(after.menu_items, before.menu_items);
    assert_eq!(after.current_restaurant, before.current_restaurant);

    // Explicit null clears a session pointer
    store
        .dispatch_json(json!({ "type": "LOAD_INITIAL_DATA", "payload": { "currentRestaurant": null } }))
        .expect("valid action");
    assert_eq!(
        session::resolve(&store.snapshot(), "/orders"),
        Screen::RestaurantSelector
    );
}

#[test]
fn test_handle_fails_once_store_dropped() {
    let store = loaded_store();
    let handle = store.handle();
    assert_eq!(handle.snapshot().unwrap().restaurants.len(), 2);

    drop(store);
    let err = handle.dispatch(Action::DeleteOrder("order-1".into())).unwrap_err();
    assert_eq!(err.code, ErrorCode::StoreNotProvided);
}

#[test]
fn test_tenant_filter_on_live_state() {
    let store = loaded_store();
    sign_in(&store, "rest-2");

    let filtered = filter_for_current(&store.snapshot());
    assert!(filtered.orders.iter().all(|o| o.restaurant_id == "rest-2"));
    assert!(filtered.menu_items.iter().all(|m| m.restaurant_id == "rest-2"));
    assert_eq!(filtered.tables.len(), 2);
    assert_eq!(filtered.restaurants.len(), 2);
}

#[test]
fn test_daily_report_for_demo_restaurant() {
    let store = loaded_store();
    sign_in(&store, "rest-1");
    let state = store.snapshot();

    let report = ReportEngine::default().build(
        &state,
        ReportWindow::Today,
        state.current_restaurant_id(),
        now(),
    );

    assert_eq!(report.summary.total_orders, 4);
    assert_eq!(report.summary.total_revenue, 118.0);
    assert_eq!(report.summary.average_order_value, 29.5);
    // Takeaway + delivery + one completed reservation
    assert_eq!(report.summary.total_customers, 3);
    assert_eq!(report.order_types.dine_in, 2);
    assert_eq!(report.order_types.total(), report.summary.total_orders);

    let items: Vec<(&str, u64)> = report
        .popular_items
        .iter()
        .map(|i| (i.name.as_str(), i.quantity))
        .collect();
    assert_eq!(
        items,
        vec![
            ("Espresso", 5),
            ("Tiramisu", 4),
            ("Margherita Pizza", 3),
            ("Spaghetti Carbonara", 3),
        ]
    );

    let staff: Vec<(&str, usize)> = report
        .staff_performance
        .iter()
        .map(|s| (s.name.as_str(), s.orders))
        .collect();
    assert_eq!(
        staff,
        vec![("Giulia Bianchi", 2), ("Sam Rivera", 1), ("Luca Ferri", 1)]
    );

    let tables: Vec<u32> = report.table_utilization.iter().map(|t| t.table).collect();
    assert_eq!(tables, vec![2, 3, 1]);
    assert_eq!(report.recent_activity.len(), 4);
}

#[test]
fn test_menu_edits_do_not_rewrite_history() {
    let store = loaded_store();
    sign_in(&store, "rest-1");

    let mut espresso = store
        .snapshot()
        .menu_items
        .iter()
        .find(|m| m.id == "menu-4")
        .cloned()
        .unwrap();
    espresso.price = 9.0;
    store.dispatch(Action::UpdateMenuItem(espresso));
    store.dispatch(Action::DeleteMenuItem("menu-3".into()));

    let state = store.snapshot();
    let report = ReportEngine::default().build(&state, ReportWindow::Today, Some("rest-1"), now());

    // Order totals are stored, not recomputed
    assert_eq!(report.summary.total_revenue, 118.0);
    let espresso = report
        .popular_items
        .iter()
        .find(|i| i.name == "Espresso")
        .unwrap();
    assert_eq!(espresso.revenue, 12.5);
    // Lines of the deleted item drop out of the ranking
    assert!(report.popular_items.iter().all(|i| i.name != "Tiramisu"));
}

#[test]
fn test_export_round_trip_to_disk() {
    let store = loaded_store();
    let state: Arc<AppState> = store.snapshot();
    let report = ReportEngine::default().build(&state, ReportWindow::Month, None, now());

    let dir = tempfile::tempdir().unwrap();
    let date = now().date_naive();
    let path = write_export(dir.path(), &report, date).expect("export");
    assert_eq!(path.file_name().unwrap().to_str().unwrap(), export_file_name(date));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["period"], "month");
    assert_eq!(value["dateRange"]["start"], "2024-05-01");
    assert_eq!(value["dateRange"]["end"], "2024-05-31");
    // Both restaurants, including the order from two days ago
    assert_eq!(value["summary"]["totalOrders"], 6);
}
