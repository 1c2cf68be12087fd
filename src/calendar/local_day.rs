//! Local Day Module
//!
//! Normalizes date inputs to the calendar day shown on the location's clocks.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::error::{PrayerError, Result};

/// Naive date-time layouts read as local wall-clock time.
const LOCAL_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// The calendar day currently shown at `offset`.
pub fn local_today(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

/// Resolves an optional date input to a local calendar day.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 instant (converted to `offset`), or a
/// naive local date-time. A missing or blank input means today.
pub fn resolve_local_day(input: Option<&str>, offset: FixedOffset) -> Result<NaiveDate> {
    let raw = match input.map(str::trim) {
        None | Some("") => return Ok(local_today(offset)),
        Some(raw) => raw,
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&offset).date_naive());
    }

    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|local| local.date())
        .ok_or_else(|| PrayerError::InvalidDate(raw.to_string()))
}

/// Cache key for a calendar day (`YYYY-MM-DD`).
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `date` shifted by a signed number of days, `None` past chrono's range.
pub fn offset_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}
