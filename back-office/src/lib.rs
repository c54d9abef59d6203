//! Crab Back Office - restaurant management state core
//!
//! # Overview
//!
//! - **Store** (`store`): single state aggregate, pure reducer, snapshot publication
//! - **Session** (`session`): login / restaurant-selection gate and routing
//! - **Tenant** (`tenant`): per-restaurant views over the state
//! - **Reports** (`reports`): windowed sales aggregation and JSON export
//!
//! # Layout
//!
//! ```text
//! back-office/src/
//! ├── core/          # configuration, environment setup
//! ├── store/         # state, actions, reducer, provider
//! ├── reports/       # windows, engine, export
//! ├── utils/         # logging, business-time helpers
//! ├── session.rs
//! ├── tenant.rs
//! └── seed.rs        # demo data
//! ```

pub mod core;
pub mod reports;
pub mod seed;
pub mod session;
pub mod store;
pub mod tenant;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export public types
pub use core::{Config, setup_environment};
pub use reports::{ReportDocument, ReportEngine, ReportWindow};
pub use session::{Route, Screen, SessionPhase};
pub use store::{Action, AppState, Store, StoreHandle};
pub use tenant::TenantView;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______           __       ____             __
  / ____/________ _/ /_     / __ )____ ______/ /__
 / /   / ___/ __ `/ __ \   / __  / __ `/ ___/ //_/
/ /___/ /  / /_/ / /_/ /  / /_/ / /_/ / /__/ ,<
\____/_/   \__,_/_.___/  /_____/\__,_/\___/_/|_|
                                   Back Office v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
