//! Mosque Prayer - prayer-time service for the Mashhad mosque dashboard
//!
//! Computes daily prayer times astronomically and memoizes them per local
//! calendar day, labelled with the Shamsi date.

pub mod api;
pub mod cache;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod prayer;
pub mod tasks;

pub use api::AppState;
pub use cache::{PrayerDay, PrayerDayCache, PrewarmOptions};
pub use config::Config;
pub use error::PrayerError;
pub use prayer::{calculate_prayer_times, PrayerTimes};
pub use tasks::spawn_prewarm_task;
