//! Location Module
//!
//! Fixed geographic location and calculation-method parameters.

use chrono::{FixedOffset, Offset, Utc};

// == Location ==
/// Geographic location with a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
    /// Clock offset from UTC in hours
    pub utc_offset_hours: f64,
}

impl Location {
    /// Correction applied to raw solar hours to get local clock hours.
    pub fn clock_correction(&self) -> f64 {
        self.utc_offset_hours - self.longitude / 15.0
    }

    /// The location's offset as a chrono timezone.
    pub fn offset(&self) -> FixedOffset {
        let seconds = (self.utc_offset_hours * 3600.0).round() as i32;
        FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
    }
}

/// Mashhad, Iran Standard Time (+03:30, no daylight saving).
pub const MASHHAD: Location = Location {
    latitude: 36.2972,
    longitude: 59.6067,
    utc_offset_hours: 3.5,
};

// == Method Parameters ==
/// Depression angles (degrees below the horizon) and the asr shadow factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodParams {
    pub fajr_angle: f64,
    /// Refraction plus solar semi-diameter, shared by sunrise and sunset
    pub sunrise_angle: f64,
    pub maghrib_angle: f64,
    pub isha_angle: f64,
    /// Shadow length factor for asr (1 = standard, 2 = Hanafi)
    pub asr_shadow_factor: f64,
}

/// Institute of Geophysics, University of Tehran.
pub const TEHRAN_METHOD: MethodParams = MethodParams {
    fajr_angle: 17.7,
    sunrise_angle: 0.833,
    maghrib_angle: 4.5,
    isha_angle: 14.0,
    asr_shadow_factor: 1.0,
};
