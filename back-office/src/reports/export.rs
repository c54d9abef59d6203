//! JSON export of report documents

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use super::ReportDocument;
use crate::utils::{AppError, AppResult};

/// `restaurant-report-<YYYY-MM-DD>.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("restaurant-report-{}.json", date.format("%Y-%m-%d"))
}

/// Pretty-printed JSON
pub fn to_json(doc: &ReportDocument) -> AppResult<String> {
    serde_json::to_string_pretty(doc)
        .map_err(|e| AppError::export_failed(format!("Failed to serialize report: {}", e)))
}

/// Write `doc` into `dir`, named after `date`; returns the written path
pub fn write_export(dir: &Path, doc: &ReportDocument, date: NaiveDate) -> AppResult<PathBuf> {
    let json = to_json(doc)?;
    let path = dir.join(export_file_name(date));
    std::fs::write(&path, json)
        .map_err(|e| AppError::export_failed(format!("{}: {}", path.display(), e)))?;

    info!(path = %path.display(), period = %doc.period, "[Reports] Report exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{ReportEngine, ReportWindow};
    use crate::store::AppState;
    use crate::test_support::*;
    use chrono::{TimeZone, Utc};
    use shared::error::ErrorCode;
    use shared::models::OrderType;

    fn sample() -> ReportDocument {
        let now = Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap();
        let state = AppState {
            restaurants: vec![restaurant("r1")],
            tables: vec![table("t1", "r1", 4)],
            orders: vec![order("o1", "r1", OrderType::DineIn, 12.5, now.timestamp_millis())],
            ..Default::default()
        };
        ReportEngine::default().build(&state, ReportWindow::Today, Some("r1"), now)
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "restaurant-report-2024-03-07.json");
    }

    #[test]
    fn test_json_shape() {
        let json = to_json(&sample()).unwrap();
        assert!(json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["period"], "today");
        assert_eq!(value["dateRange"]["start"], "2024-05-15");
        assert_eq!(value["summary"]["totalRevenue"], 12.5);
        assert_eq!(value["summary"]["averageOrderValue"], 12.5);
        assert_eq!(value["orderTypes"]["dine-in"], 1);
        assert_eq!(value["tableUtilization"][0]["table"], 4);
        assert_eq!(value["recentActivity"][0]["type"], "dine-in");
        assert!(value["popularItems"].is_array());
        assert!(value["staffPerformance"].is_array());
    }

    #[test]
    fn test_write_export() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let doc = sample();

        let path = write_export(dir.path(), &doc, date).unwrap();
        assert_eq!(path, dir.path().join("restaurant-report-2024-05-15.json"));

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: ReportDocument = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();

        let err = write_export(&missing, &sample(), date).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExportFailed);
    }
}
