//! Astronomy Module
//!
//! Low-precision solar position good to about a minute of time, which is all
//! the prayer-time boundaries need.

use chrono::{Datelike, NaiveDate};

/// Julian Day of the J2000.0 epoch.
const J2000: f64 = 2451545.0;

// == Sun Position ==
/// Solar declination and equation of time for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Declination in degrees
    pub declination: f64,
    /// Equation of time in hours
    pub equation_of_time: f64,
}

/// Computes the sun's position at the given (fractional) Julian Day.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000;

    let g = fix_angle(357.529 + 0.98560028 * d);
    let q = fix_angle(280.459 + 0.98564736 * d);
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));
    let e = 23.439 - 0.00000036 * d;

    let right_ascension = datan2(dcos(e) * dsin(l), dcos(l)) / 15.0;

    SunPosition {
        declination: dasin(dsin(e) * dsin(l)),
        equation_of_time: q / 15.0 - fix_hour(right_ascension),
    }
}

// == Julian Day ==
/// Julian Day number of the given Gregorian date at 0h UTC.
pub fn julian_day(date: NaiveDate) -> f64 {
    let mut year = date.year() as f64;
    let mut month = date.month() as f64;
    let day = date.day() as f64;

    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + b - 1524.5
}

// == Range Reduction ==
/// Reduces an angle into `[0, 360)`.
pub fn fix_angle(angle: f64) -> f64 {
    fix(angle, 360.0)
}

/// Reduces an hour value into `[0, 24)`.
pub fn fix_hour(hour: f64) -> f64 {
    fix(hour, 24.0)
}

fn fix(value: f64, modulus: f64) -> f64 {
    let reduced = value - modulus * (value / modulus).floor();
    // floor can leave exactly `modulus` behind for tiny negative inputs
    if reduced >= modulus {
        reduced - modulus
    } else {
        reduced
    }
}

// == Degree Trigonometry ==
pub(crate) fn dsin(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

pub(crate) fn dcos(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

pub(crate) fn dtan(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

pub(crate) fn dasin(x: f64) -> f64 {
    x.asin().to_degrees()
}

pub(crate) fn dacos(x: f64) -> f64 {
    x.acos().to_degrees()
}

pub(crate) fn datan2(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Arc cotangent in degrees.
pub(crate) fn dacot(x: f64) -> f64 {
    (1.0 / x).atan().to_degrees()
}
