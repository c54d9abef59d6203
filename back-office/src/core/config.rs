use chrono::Weekday;
use chrono_tz::Tz;

use crate::reports::ReportWindow;
use crate::utils::time::{parse_timezone, parse_weekday};

/// Back-office configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | directory for daily-rolling log files |
/// | LOG_JSON | false | emit JSON log lines |
/// | BUSINESS_TIMEZONE | UTC | IANA zone for report window boundaries |
/// | WEEK_STARTS_ON | sunday | first day of a `week` report window |
/// | EXPORT_DIR | . | where report exports are written |
/// | REPORT_WINDOW | today | window used by the binary |
///
/// # Example
///
/// ```ignore
/// BUSINESS_TIMEZONE=Europe/Madrid REPORT_WINDOW=week cargo run -p back-office
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
    /// Timezone that defines day / week / month boundaries
    pub timezone: Tz,
    pub week_starts_on: Weekday,
    pub export_dir: String,
    pub report_window: ReportWindow,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset variables take their default; invalid ones are logged and
    /// replaced by the default.
    pub fn from_env() -> Self {
        let timezone = match std::env::var("BUSINESS_TIMEZONE") {
            Ok(name) => parse_timezone(&name).unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to UTC", e);
                chrono_tz::UTC
            }),
            Err(_) => chrono_tz::UTC,
        };

        let week_starts_on = match std::env::var("WEEK_STARTS_ON") {
            Ok(name) => parse_weekday(&name).unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to sunday", e);
                Weekday::Sun
            }),
            Err(_) => Weekday::Sun,
        };

        let report_window = match std::env::var("REPORT_WINDOW") {
            Ok(label) => label.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to today", e);
                ReportWindow::Today
            }),
            Err(_) => ReportWindow::Today,
        };

        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            timezone,
            week_starts_on,
            export_dir: std::env::var("EXPORT_DIR").unwrap_or_else(|_| ".".into()),
            report_window,
        }
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            log_json: false,
            timezone: chrono_tz::UTC,
            week_starts_on: Weekday::Sun,
            export_dir: ".".into(),
            report_window: ReportWindow::Today,
        }
    }
}
