//! Test doubles for the cache module.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::prayer::{AstronomicalCalculator, DayTimes, PrayerCalculator};

/// Wraps the real calculator and counts single-day computations.
#[derive(Debug, Clone, Default)]
pub struct CountingCalculator {
    inner: AstronomicalCalculator,
    calls: Arc<AtomicUsize>,
}

impl CountingCalculator {
    /// Returns the calculator and a handle to its call counter.
    pub fn with_counter() -> (Self, Arc<AtomicUsize>) {
        let calculator = Self::default();
        let calls = calculator.calls.clone();
        (calculator, calls)
    }
}

impl PrayerCalculator for CountingCalculator {
    fn compute_day(&self, date: NaiveDate) -> DayTimes {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.compute_day(date)
    }
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
