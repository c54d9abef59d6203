//! Report time windows

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use shared::Timestamp;
use shared::error::ErrorCode;

use crate::utils::time::{
    day_end_millis, day_start_millis, local_date, month_end_date, month_start_date,
    week_start_date,
};
use crate::utils::{AppError, AppResult};

/// Calendar period a report covers, anchored at evaluation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportWindow {
    #[default]
    Today,
    Week,
    Month,
}

impl ReportWindow {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Resolve to concrete bounds for the local date of `now`
    pub fn resolve(&self, now: DateTime<Utc>, tz: Tz, week_start: Weekday) -> WindowBounds {
        let today = local_date(now, tz);
        let (start_date, end_date) = match self {
            Self::Today => (today, today),
            Self::Week => {
                let first = week_start_date(today, week_start);
                (first, first + chrono::Duration::days(6))
            }
            Self::Month => (month_start_date(today), month_end_date(today)),
        };

        WindowBounds {
            start: day_start_millis(start_date, tz),
            end: day_end_millis(end_date, tz),
            start_date,
            end_date,
        }
    }
}

impl FromStr for ReportWindow {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(AppError::with_message(
                ErrorCode::InvalidReportWindow,
                format!("Unknown report window: {}", other),
            )),
        }
    }
}

impl std::fmt::Display for ReportWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive instant range plus the calendar dates it spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    /// First millisecond of `start_date`
    pub start: Timestamp,
    /// Last millisecond of `end_date`
    pub end: Timestamp,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl WindowBounds {
    /// `start <= ts <= end`
    #[inline]
    pub fn contains(&self, ts: Timestamp) -> bool {
        self.start <= ts && ts <= self.end
    }
}
