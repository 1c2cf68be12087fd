//! Prayer Day Cache Module
//!
//! Day-keyed store of computed prayer days wrapped around a calculator.

use std::collections::HashMap;
use std::fmt;

use chrono::{FixedOffset, NaiveDate};
use tracing::{debug, info};

use crate::cache::{CacheStats, PrayerDay, DEFAULT_BACKFILL_DAYS, DEFAULT_FORWARD_DAYS};
use crate::calendar::{
    day_key, local_today, offset_days, parse_shamsi_date, resolve_local_day, to_gregorian,
};
use crate::error::{PrayerError, Result};
use crate::prayer::{AstronomicalCalculator, PrayerCalculator, PrayerTimes};

// == Prewarm Options ==
/// Window covered by [`PrayerDayCache::ensure_prayer_cache_prewarmed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrewarmOptions {
    /// Days before today
    pub backfill_days: u32,
    /// Days after today
    pub forward_days: u32,
    /// Warm again even if already pre-warmed
    pub force: bool,
}

impl Default for PrewarmOptions {
    fn default() -> Self {
        Self {
            backfill_days: DEFAULT_BACKFILL_DAYS,
            forward_days: DEFAULT_FORWARD_DAYS,
            force: false,
        }
    }
}

// == Prayer Day Cache ==
/// Memoizes one [`PrayerDay`] per local calendar day.
///
/// Entries are never invalidated individually; [`clear_prayer_cache`]
/// drops them all.
///
/// [`clear_prayer_cache`]: PrayerDayCache::clear_prayer_cache
pub struct PrayerDayCache {
    /// Single-day calculator; invoked for the day and the day after
    calculator: Box<dyn PrayerCalculator>,
    /// Clock offset used to decide which calendar day "now" is
    offset: FixedOffset,
    /// Entries keyed by `YYYY-MM-DD`
    entries: HashMap<String, PrayerDay>,
    stats: CacheStats,
    prewarmed: bool,
}

impl PrayerDayCache {
    // == Constructor ==
    /// Creates an empty cache over the Mashhad calculator.
    pub fn new() -> Self {
        let calculator = AstronomicalCalculator::default();
        let offset = calculator.location().offset();
        Self::with_calculator(Box::new(calculator), offset)
    }

    /// Creates an empty cache over any calculator.
    pub fn with_calculator(calculator: Box<dyn PrayerCalculator>, offset: FixedOffset) -> Self {
        Self {
            calculator,
            offset,
            entries: HashMap::new(),
            stats: CacheStats::new(),
            prewarmed: false,
        }
    }

    // == Get Prayer Day ==
    /// Returns the entry for the day named by `input`, computing it on a miss.
    ///
    /// A missing input means today at the cache's clock offset.
    pub fn get_prayer_day(&mut self, input: Option<&str>) -> Result<PrayerDay> {
        let date = resolve_local_day(input, self.offset)?;
        Ok(self.get_or_compute(date))
    }

    /// Returns the entry for `date`, computing it on a miss.
    pub fn get_or_compute(&mut self, date: NaiveDate) -> PrayerDay {
        let key = day_key(date);

        if let Some(entry) = self.entries.get(&key) {
            self.stats.record_hit();
            return entry.clone();
        }

        self.stats.record_miss();
        let entry = self.compute(date);
        self.insert(key, entry.clone());
        entry
    }

    // == Warm ==
    /// Ensures entries exist for `days` consecutive days from `start`
    /// (default today). Returns how many entries were newly computed.
    pub fn warm_prayer_cache(&mut self, days: u32, start: Option<&str>) -> Result<usize> {
        let start = resolve_local_day(start, self.offset)?;
        let computed = self.warm_from(start, days);

        info!(
            "Warmed {} days from {}: {} computed, {} entries cached",
            days,
            day_key(start),
            computed,
            self.entries.len()
        );
        Ok(computed)
    }

    // == Clear ==
    /// Drops every entry and resets the pre-warmed flag.
    pub fn clear_prayer_cache(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.prewarmed = false;
        self.stats.set_total_entries(0);
        info!("Prayer cache cleared ({} entries dropped)", dropped);
    }

    // == Ensure Prewarmed ==
    /// Warms the window around today once; later calls are no-ops unless
    /// `options.force` is set. Returns how many entries were computed.
    pub fn ensure_prayer_cache_prewarmed(&mut self, options: PrewarmOptions) -> usize {
        if self.prewarmed && !options.force {
            debug!("Prayer cache already pre-warmed");
            return 0;
        }

        let today = local_today(self.offset);
        let start = offset_days(today, -i64::from(options.backfill_days)).unwrap_or(today);
        let span = options.backfill_days.saturating_add(options.forward_days).saturating_add(1);

        let computed = self.warm_from(start, span);
        self.prewarmed = true;

        info!(
            "Prayer cache pre-warmed: {} back, {} forward, {} computed",
            options.backfill_days, options.forward_days, computed
        );
        computed
    }

    // == Hydrate Shamsi Date ==
    /// Converts a `YYYY-MM-DD` Shamsi date to its Gregorian calendar day.
    pub fn hydrate_shamsi_date(input: &str) -> Result<NaiveDate> {
        let shamsi = parse_shamsi_date(input)?;
        to_gregorian(shamsi).ok_or_else(|| PrayerError::InvalidShamsiDate(input.to_string()))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats.prewarmed = self.prewarmed;
        stats
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&day_key(date))
    }

    pub fn is_prewarmed(&self) -> bool {
        self.prewarmed
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn warm_from(&mut self, start: NaiveDate, days: u32) -> usize {
        let mut computed = 0;
        let mut date = start;

        for index in 0..days {
            if index > 0 {
                match date.succ_opt() {
                    Some(next) => date = next,
                    None => break,
                }
            }

            let key = day_key(date);
            if !self.entries.contains_key(&key) {
                let entry = self.compute(date);
                self.insert(key, entry);
                computed += 1;
            }
        }

        computed
    }

    /// Builds a complete entry; midnight needs the following day's fajr.
    fn compute(&mut self, date: NaiveDate) -> PrayerDay {
        let tomorrow = date.succ_opt().unwrap_or(date);
        let today_times = self.calculator.compute_day(date);
        let tomorrow_times = self.calculator.compute_day(tomorrow);

        self.stats.record_computation();
        debug!("Computed prayer day {}", date);

        PrayerDay::new(date, PrayerTimes::from_days(&today_times, &tomorrow_times))
    }

    fn insert(&mut self, key: String, entry: PrayerDay) {
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }
}

impl Default for PrayerDayCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PrayerDayCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrayerDayCache")
            .field("offset", &self.offset)
            .field("entries", &self.entries.len())
            .field("stats", &self.stats)
            .field("prewarmed", &self.prewarmed)
            .finish_non_exhaustive()
    }
}
