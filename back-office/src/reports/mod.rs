//! Reporting
//!
//! Window resolution, aggregation over a tenant view, and JSON export.

mod document;
mod engine;
mod export;
mod money;
mod window;

pub use document::{
    DateRange, ItemSales, OrderTypeCounts, OrderTypeShare, RecentOrder, ReportDocument,
    StaffPerformance, Summary, TableUtilization,
};
pub use engine::{RECENT_ACTIVITY_LIMIT, ReportEngine, TOP_N, build_report};
pub use export::{export_file_name, to_json, write_export};
pub use window::{ReportWindow, WindowBounds};
