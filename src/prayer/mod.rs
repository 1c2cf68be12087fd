//! Prayer Module
//!
//! Astronomical prayer-time calculation for a fixed location.

mod astronomy;
mod calculator;
mod location;

pub use astronomy::{fix_angle, fix_hour, julian_day, sun_position, SunPosition};
pub use calculator::{
    calculate_prayer_times, format_hour, midnight_hour, AstronomicalCalculator, DayTimes,
    PrayerCalculator, PrayerTimes,
};
pub use location::{Location, MethodParams, MASHHAD, TEHRAN_METHOD};

// == Public Constants ==
/// Number of refinement passes over the day-portion estimates
pub const REFINEMENT_ITERATIONS: usize = 3;

/// Placeholder emitted for a time that has no finite value
pub const INVALID_TIME: &str = "--:--";
