//! Business-timezone helpers
//!
//! Every calendar boundary is computed in the configured business timezone
//! and returned as Unix millis.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse an IANA timezone name (e.g. `Europe/Madrid`)
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| AppError::config("BUSINESS_TIMEZONE", format!("Unknown timezone: {}", name)))
}

/// Parse a weekday name (`sunday`, `mon`, ...)
pub fn parse_weekday(name: &str) -> AppResult<Weekday> {
    name.parse::<Weekday>()
        .map_err(|_| AppError::config("WEEK_STARTS_ON", format!("Unknown weekday: {}", name)))
}

/// Calendar date of `now` in the business timezone
pub fn local_date(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Longest DST gap searched past a missing wall-clock time
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Date + wall-clock time -> Unix millis (business timezone)
///
/// Ambiguous times take the earlier instant. A time skipped by a DST gap
/// resolves to the first instant after the gap.
pub fn date_time_to_millis(date: NaiveDate, time: NaiveTime, tz: Tz) -> i64 {
    let naive = date.and_time(time);
    (0..=MAX_GAP_MINUTES)
        .find_map(|minutes| {
            (naive + chrono::Duration::minutes(minutes))
                .and_local_timezone(tz)
                .earliest()
        })
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of day (00:00:00.000) -> Unix millis (business timezone)
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_time_to_millis(date, NaiveTime::MIN, tz)
}

/// Last millisecond of the day (23:59:59.999) -> Unix millis (business timezone)
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    match date.succ_opt() {
        Some(next_day) => day_start_millis(next_day, tz) - 1,
        None => date_time_to_millis(date, NaiveTime::MIN, tz) + 86_399_999,
    }
}

/// First day of the week containing `date`
pub fn week_start_date(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let days_back = (7 + date.weekday().num_days_from_monday()
        - week_start.num_days_from_monday())
        % 7;
    date - chrono::Duration::days(days_back as i64)
}

/// First day of the month containing `date`
pub fn month_start_date(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn month_end_date(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}
