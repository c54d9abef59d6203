use std::path::Path;

use back_office::reports::{ReportEngine, write_export};
use back_office::session::{self, SessionPhase};
use back_office::store::{Action, Store};
use back_office::tenant::TenantView;
use back_office::utils::time::local_date;
use back_office::{AppError, print_banner, seed, setup_environment};
use chrono::Utc;
use shared::models::{Kot, Order, OrderItem, OrderStatus, OrderType};
use shared::util::{new_id, now_millis};

fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging, config)
    let config = setup_environment();

    print_banner();

    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        window = %config.report_window,
        "🦀 Crab Back Office starting..."
    );

    // 2. Store with demo data
    let store = Store::new();
    let now = Utc::now();
    store.dispatch(Action::LoadInitialData(Box::new(
        seed::demo_bundle(now.timestamp_millis()).into(),
    )));

    // 3. Session: sign in and pick the first restaurant
    let state = store.snapshot();
    store.dispatch(Action::SetUser(state.users.first().cloned()));
    store.dispatch(Action::SetCurrentRestaurant(state.restaurants.first().cloned()));

    let state = store.snapshot();
    let screen = session::resolve(&state, "/reports");
    tracing::info!(phase = ?SessionPhase::of(&state), screen = ?screen, "Session ready");

    let restaurant_id = state
        .current_restaurant_id()
        .ok_or_else(AppError::restaurant_not_selected)?;

    // 4. Ring up a takeaway and send it to the kitchen
    let view = TenantView::new(&state, Some(restaurant_id));
    let items: Vec<OrderItem> = view
        .menu_items
        .iter()
        .filter(|m| m.is_available)
        .take(2)
        .map(|m| OrderItem {
            menu_item_id: m.id.clone(),
            quantity: 1,
            price: m.price,
            notes: None,
        })
        .collect();
    let created_at = now_millis();
    let mut order = Order {
        id: new_id("order"),
        restaurant_id: restaurant_id.to_string(),
        order_number: format!("ORD-{:03}", view.orders.len() + 1),
        order_type: OrderType::Takeaway,
        status: OrderStatus::default(),
        items,
        total: 0.0,
        table_id: None,
        staff_id: state.current_user.as_ref().map(|u| u.id.clone()),
        customer_name: Some("Walk-in".to_string()),
        created_at,
        updated_at: None,
    };
    order.total = order.items_total();
    let kot = Kot::from_order(
        new_id("kot"),
        format!("KOT-{:03}", view.kots.len() + 1),
        &order,
        &state.menu_items,
        created_at,
    );
    store.dispatch(Action::AddOrder(order));
    store.dispatch(Action::AddKot(kot));
    let state = store.snapshot();

    // 5. Report and export
    let engine = ReportEngine::from_config(&config);
    let report = engine.build(&state, config.report_window, Some(restaurant_id), now);
    tracing::info!(
        restaurant_id,
        revenue = report.summary.total_revenue,
        orders = report.summary.total_orders,
        average = report.summary.average_order_value,
        customers = report.summary.total_customers,
        "Report built"
    );

    let path = write_export(
        Path::new(&config.export_dir),
        &report,
        local_date(now, engine.timezone()),
    )?;
    tracing::info!(path = %path.display(), "Done");

    Ok(())
}
