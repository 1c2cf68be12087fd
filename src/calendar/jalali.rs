//! Shamsi (Jalali) Calendar Module
//!
//! Arithmetic Gregorian <-> Shamsi conversion on the 33-year leap cycle.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{PrayerError, Result};

/// Farsi month names, transliterated.
const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Cumulative days before each Gregorian month in a common year.
const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// == Shamsi Date ==
/// A day in the Solar Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShamsiDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl ShamsiDate {
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month as usize).clamp(1, 12) - 1]
    }

    /// Human-readable form, e.g. `25 Mehr 1405`.
    pub fn label(&self) -> String {
        format!("{} {} {}", self.day, self.month_name(), self.year)
    }
}

impl fmt::Display for ShamsiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// == Conversion ==
/// Converts a Gregorian date to its Shamsi equivalent.
pub fn to_shamsi(date: NaiveDate) -> ShamsiDate {
    let gy = date.year() as i64;
    let gm = date.month() as i64;
    let gd = date.day() as i64;

    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355666 + 365 * gy + (gy2 + 3).div_euclid(4) - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        + gd
        + GREGORIAN_DAYS_BEFORE_MONTH[(gm - 1) as usize];

    let mut jy = -1595 + 33 * days.div_euclid(12053);
    days = days.rem_euclid(12053);
    jy += 4 * days.div_euclid(1461);
    days = days.rem_euclid(1461);
    if days > 365 {
        jy += (days - 1).div_euclid(365);
        days = (days - 1).rem_euclid(365);
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    ShamsiDate {
        year: jy as i32,
        month: jm as u32,
        day: jd as u32,
    }
}

/// Converts a Shamsi date to Gregorian.
///
/// Returns `None` when the result falls outside chrono's date range. Out of
/// range month/day values roll over; use [`parse_shamsi_date`] to validate.
pub fn to_gregorian(date: ShamsiDate) -> Option<NaiveDate> {
    let jy = date.year as i64 + 1595;
    let jm = date.month as i64;
    let jd = date.day as i64;

    let month_offset = if jm < 7 {
        (jm - 1) * 31
    } else {
        (jm - 7) * 30 + 186
    };
    let mut days = -355668 + 365 * jy + jy.div_euclid(33) * 8 + (jy.rem_euclid(33) + 3) / 4
        + jd
        + month_offset;

    let mut gy = 400 * days.div_euclid(146097);
    days = days.rem_euclid(146097);
    if days > 36524 {
        days -= 1;
        gy += 100 * days.div_euclid(36524);
        days = days.rem_euclid(36524);
        if days >= 365 {
            days += 1;
        }
    }
    gy += 4 * days.div_euclid(1461);
    days = days.rem_euclid(1461);
    if days > 365 {
        gy += (days - 1).div_euclid(365);
        days = (days - 1).rem_euclid(365);
    }

    let leap = (gy % 4 == 0 && gy % 100 != 0) || gy % 400 == 0;
    let month_lengths = [31, if leap { 29 } else { 28 }, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    let mut gd = days + 1;
    let mut gm = 1;
    for length in month_lengths {
        if gd <= length {
            break;
        }
        gd -= length;
        gm += 1;
    }

    NaiveDate::from_ymd_opt(i32::try_from(gy).ok()?, gm, gd as u32)
}

// == Parsing ==
/// Parses a `YYYY-MM-DD` (or `YYYY/MM/DD`) Shamsi date.
///
/// Persian and Arabic-Indic digits are accepted. The result always names a
/// real Shamsi day.
pub fn parse_shamsi_date(input: &str) -> Result<ShamsiDate> {
    let invalid = || PrayerError::InvalidShamsiDate(input.to_string());

    let normalized = normalize_digits(input.trim());
    let parts: Vec<&str> = normalized.split(['-', '/']).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };

    let date = ShamsiDate {
        year: year.parse().map_err(|_| invalid())?,
        month: month.parse().map_err(|_| invalid())?,
        day: day.parse().map_err(|_| invalid())?,
    };

    if !(1..=12).contains(&date.month) || !(1..=31).contains(&date.day) {
        return Err(invalid());
    }

    // Esfand 30 outside a leap year, Mehr 31 and friends roll over
    match to_gregorian(date) {
        Some(gregorian) if to_shamsi(gregorian) == date => Ok(date),
        _ => Err(invalid()),
    }
}

fn normalize_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            _ => c,
        })
        .collect()
}
