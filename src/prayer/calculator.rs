//! Prayer Calculator Module
//!
//! Hour-angle based prayer times with a fixed number of refinement passes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::astronomy::{dacos, dacot, dcos, dsin, dtan, fix_hour, julian_day, sun_position};
use super::location::{Location, MethodParams, MASHHAD, TEHRAN_METHOD};
use super::{INVALID_TIME, REFINEMENT_ITERATIONS};

// == Day Times ==
/// Prayer boundaries for one day as fractional hours.
///
/// Values returned by [`PrayerCalculator::compute_day`] are local clock
/// hours in `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTimes {
    pub fajr: f64,
    pub sunrise: f64,
    pub zuhr: f64,
    pub asr: f64,
    pub sunset: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl DayTimes {
    /// Rough starting guesses for the refinement.
    const INITIAL: DayTimes = DayTimes {
        fajr: 5.0,
        sunrise: 6.0,
        zuhr: 12.0,
        asr: 13.0,
        sunset: 18.0,
        maghrib: 18.2,
        isha: 20.0,
    };

    fn map(self, f: impl Fn(f64) -> f64) -> DayTimes {
        DayTimes {
            fajr: f(self.fajr),
            sunrise: f(self.sunrise),
            zuhr: f(self.zuhr),
            asr: f(self.asr),
            sunset: f(self.sunset),
            maghrib: f(self.maghrib),
            isha: f(self.isha),
        }
    }
}

// == Calculator Trait ==
/// Computes a single day's prayer boundaries.
///
/// Implementations must be pure: the same date always yields the same times.
pub trait PrayerCalculator: Send + Sync {
    /// Local clock hours for the given calendar day.
    fn compute_day(&self, date: NaiveDate) -> DayTimes;
}

// == Astronomical Calculator ==
/// Solar hour-angle calculator for a fixed location and method.
#[derive(Debug, Clone, Copy)]
pub struct AstronomicalCalculator {
    location: Location,
    method: MethodParams,
}

impl AstronomicalCalculator {
    pub fn new(location: Location, method: MethodParams) -> Self {
        Self { location, method }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Full prayer record for `date`, including midnight from tomorrow's fajr.
    pub fn prayer_times(&self, date: NaiveDate) -> PrayerTimes {
        let tomorrow = date.succ_opt().unwrap_or(date);
        PrayerTimes::from_days(&self.compute_day(date), &self.compute_day(tomorrow))
    }

    /// One refinement pass: every boundary recomputed from its current estimate.
    fn refine(&self, jd: f64, estimate: DayTimes) -> DayTimes {
        let portion = estimate.map(|hour| hour / 24.0);
        let method = &self.method;

        DayTimes {
            fajr: self.sun_angle_time(jd, method.fajr_angle, portion.fajr, true),
            sunrise: self.sun_angle_time(jd, method.sunrise_angle, portion.sunrise, true),
            zuhr: self.solar_noon(jd, portion.zuhr),
            asr: self.asr_time(jd, portion.asr),
            sunset: self.sun_angle_time(jd, method.sunrise_angle, portion.sunset, false),
            maghrib: self.sun_angle_time(jd, method.maghrib_angle, portion.maghrib, false),
            isha: self.sun_angle_time(jd, method.isha_angle, portion.isha, false),
        }
    }

    fn solar_noon(&self, jd: f64, portion: f64) -> f64 {
        fix_hour(12.0 - sun_position(jd + portion).equation_of_time)
    }

    /// Time at which the sun sits `depression` degrees below the horizon.
    fn sun_angle_time(&self, jd: f64, depression: f64, portion: f64, before_noon: bool) -> f64 {
        let declination = sun_position(jd + portion).declination;
        let noon = self.solar_noon(jd, portion);
        let latitude = self.location.latitude;

        let cos_hour_angle = (-dsin(depression) - dsin(declination) * dsin(latitude))
            / (dcos(declination) * dcos(latitude));
        let hour_angle = dacos(cos_hour_angle) / 15.0;

        if before_noon {
            noon - hour_angle
        } else {
            noon + hour_angle
        }
    }

    fn asr_time(&self, jd: f64, portion: f64) -> f64 {
        let declination = sun_position(jd + portion).declination;
        let depression = -dacot(
            self.method.asr_shadow_factor + dtan((self.location.latitude - declination).abs()),
        );
        self.sun_angle_time(jd, depression, portion, false)
    }
}

impl Default for AstronomicalCalculator {
    fn default() -> Self {
        Self::new(MASHHAD, TEHRAN_METHOD)
    }
}

impl PrayerCalculator for AstronomicalCalculator {
    fn compute_day(&self, date: NaiveDate) -> DayTimes {
        let jd = julian_day(date);

        let mut times = DayTimes::INITIAL;
        for _ in 0..REFINEMENT_ITERATIONS {
            times = self.refine(jd, times);
        }

        let correction = self.location.clock_correction();
        times.map(|hour| fix_hour(hour + correction))
    }
}

// == Prayer Times ==
/// Formatted `HH:MM` prayer times for one local calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimes {
    pub fajr: String,
    pub sunrise: String,
    pub zuhr: String,
    pub asr: String,
    pub sunset: String,
    pub maghrib: String,
    pub isha: String,
    pub midnight: String,
}

impl PrayerTimes {
    /// Builds the record from today's hours and tomorrow's (for midnight).
    pub fn from_days(today: &DayTimes, tomorrow: &DayTimes) -> Self {
        Self {
            fajr: format_hour(today.fajr),
            sunrise: format_hour(today.sunrise),
            zuhr: format_hour(today.zuhr),
            asr: format_hour(today.asr),
            sunset: format_hour(today.sunset),
            maghrib: format_hour(today.maghrib),
            isha: format_hour(today.isha),
            midnight: format_hour(midnight_hour(today.sunset, tomorrow.fajr)),
        }
    }
}

/// Midpoint of the night between `sunset` and the following day's fajr.
pub fn midnight_hour(sunset: f64, next_fajr: f64) -> f64 {
    fix_hour(sunset + ((24.0 - sunset) + next_fajr) / 2.0)
}

/// Formats fractional hours as `HH:MM`, rounded to the nearest minute.
pub fn format_hour(hour: f64) -> String {
    if !hour.is_finite() {
        return INVALID_TIME.to_string();
    }

    let minutes = (fix_hour(hour) * 60.0).round() as u32 % (24 * 60);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Prayer times for `date` at Mashhad using the Tehran method.
pub fn calculate_prayer_times(date: NaiveDate) -> PrayerTimes {
    AstronomicalCalculator::default().prayer_times(date)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn to_minutes(hhmm: &str) -> i32 {
        let (h, m) = hhmm.split_once(':').unwrap();
        h.parse::<i32>().unwrap() * 60 + m.parse::<i32>().unwrap()
    }

    #[test]
    fn test_format_hour_rounding() {
        assert_eq!(format_hour(5.0), "05:00");
        assert_eq!(format_hour(5.0 + 29.4 / 60.0), "05:29");
        assert_eq!(format_hour(5.0 + 29.6 / 60.0), "05:30");
    }

    #[test]
    fn test_format_hour_wraps() {
        assert_eq!(format_hour(23.0 + 59.8 / 60.0), "00:00");
        assert_eq!(format_hour(24.5), "00:30");
        assert_eq!(format_hour(-1.0), "23:00");
    }

    #[test]
    fn test_format_hour_non_finite() {
        assert_eq!(format_hour(f64::NAN), INVALID_TIME);
        assert_eq!(format_hour(f64::INFINITY), INVALID_TIME);
    }

    #[test]
    fn test_midnight_hour() {
        // Sunset 18:00, next fajr 04:00 -> 23:00
        assert!((midnight_hour(18.0, 4.0) - 23.0).abs() < 1e-12);
        // Past clock midnight wraps
        assert!((midnight_hour(20.0, 6.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let date = ymd(2025, 3, 21);
        assert_eq!(calculate_prayer_times(date), calculate_prayer_times(date));
    }

    #[test]
    fn test_june_solstice_mashhad() {
        let times = calculate_prayer_times(ymd(2024, 6, 20));

        // Solar noon at 59.61°E on +03:30 clocks, equation of time about -1.7 min
        assert!((to_minutes(&times.zuhr) - to_minutes("11:33")).abs() <= 1);
        assert!((to_minutes(&times.sunrise) - to_minutes("04:14")).abs() <= 1);
        assert!((to_minutes(&times.sunset) - to_minutes("18:52")).abs() <= 1);
    }

    #[test]
    fn test_twilight_longer_at_solstice_than_equinox() {
        let solstice = calculate_prayer_times(ymd(2024, 6, 20));
        let equinox = calculate_prayer_times(ymd(2024, 3, 20));

        let dawn = |t: &PrayerTimes| to_minutes(&t.sunrise) - to_minutes(&t.fajr);
        let dusk = |t: &PrayerTimes| to_minutes(&t.isha) - to_minutes(&t.sunset);

        assert!(dawn(&solstice) > dawn(&equinox) + 15);
        assert!(dusk(&solstice) > dusk(&equinox) + 10);
    }

    #[test]
    fn test_ordering_across_year() {
        let calculator = AstronomicalCalculator::default();
        let mut date = ymd(2024, 1, 1);

        while date.year() == 2024 {
            let t = calculator.prayer_times(date);
            let sequence = [
                &t.fajr, &t.sunrise, &t.zuhr, &t.asr, &t.sunset, &t.maghrib, &t.isha,
            ]
            .map(|s| to_minutes(s));
            assert!(
                sequence.windows(2).all(|w| w[0] < w[1]),
                "out of order on {date}: {t:?}"
            );

            // Midnight measured as elapsed time after sunset
            let after_sunset = (to_minutes(&t.midnight) - to_minutes(&t.sunset)).rem_euclid(1440);
            assert!(after_sunset > 0 && after_sunset < 720, "midnight on {date}: {t:?}");

            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_year_one_is_well_formed() {
        let times = calculate_prayer_times(ymd(1, 1, 1));
        for value in [
            &times.fajr,
            &times.sunrise,
            &times.zuhr,
            &times.asr,
            &times.sunset,
            &times.maghrib,
            &times.isha,
            &times.midnight,
        ] {
            assert_eq!(value.len(), 5);
            assert!(to_minutes(value) < 1440);
        }
    }

    #[test]
    fn test_compute_day_hours_in_range() {
        let day = AstronomicalCalculator::default().compute_day(ymd(2026, 10, 17));
        for hour in [day.fajr, day.sunrise, day.zuhr, day.asr, day.sunset, day.maghrib, day.isha] {
            assert!((0.0..24.0).contains(&hour));
        }
    }
}
