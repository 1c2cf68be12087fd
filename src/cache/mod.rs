//! Cache Module
//!
//! Day-keyed memoization of computed prayer days with explicit pre-warming.

mod entry;
mod stats;
mod store;

#[cfg(test)]
pub(crate) mod testing;


// Re-export public types
pub use entry::PrayerDay;
pub use stats::CacheStats;
pub use store::{PrayerDayCache, PrewarmOptions};

// == Public Constants ==
/// Default number of days warmed before today
pub const DEFAULT_BACKFILL_DAYS: u32 = 7;

/// Default number of days warmed after today
pub const DEFAULT_FORWARD_DAYS: u32 = 366;

/// Largest range a single warm request may cover
pub const MAX_WARM_DAYS: u32 = 3660;
