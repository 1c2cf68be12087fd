//! Prayer Day Module
//!
//! The cached payload for one local calendar day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::{day_key, to_shamsi};
use crate::prayer::PrayerTimes;

// == Prayer Day ==
/// A computed prayer day: ISO date, Shamsi labels, and the prayer times.
///
/// Entries are final once built; a fixed date's times never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerDay {
    /// Gregorian date, `YYYY-MM-DD`
    pub date: String,
    /// Shamsi date, `YYYY-MM-DD`
    pub shamsi_date: String,
    /// Human-readable Shamsi date, e.g. `25 Mehr 1405`
    pub shamsi_label: String,
    pub times: PrayerTimes,
    /// When this entry was computed
    pub computed_at: DateTime<Utc>,
}

impl PrayerDay {
    // == Constructor ==
    /// Labels `times` for `date` and stamps the computation time.
    pub fn new(date: NaiveDate, times: PrayerTimes) -> Self {
        let shamsi = to_shamsi(date);
        Self {
            date: day_key(date),
            shamsi_date: shamsi.to_string(),
            shamsi_label: shamsi.label(),
            times,
            computed_at: Utc::now(),
        }
    }

    /// True when both entries describe the same day with the same times,
    /// regardless of when each was computed.
    pub fn same_day_as(&self, other: &PrayerDay) -> bool {
        self.date == other.date
            && self.shamsi_date == other.shamsi_date
            && self.shamsi_label == other.shamsi_label
            && self.times == other.times
    }
}
