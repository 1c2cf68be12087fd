//! Calendar Module
//!
//! Local calendar-day resolution and Shamsi (Jalali) conversion.

mod jalali;
mod local_day;

pub use jalali::{parse_shamsi_date, to_gregorian, to_shamsi, ShamsiDate};
pub use local_day::{day_key, local_today, offset_days, resolve_local_day};
