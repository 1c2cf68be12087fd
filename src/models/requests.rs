//! Request DTOs for the prayer-time API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;

use crate::cache::MAX_WARM_DAYS;

/// Query string for GET /prayer-times
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrayerDayQuery {
    /// Date or instant to look up; today when absent
    #[serde(default)]
    pub date: Option<String>,
}

/// Request body for POST /prayer-times/warm
///
/// # Fields
/// - `days`: Number of consecutive days to warm
/// - `start`: First day of the range (default: today)
#[derive(Debug, Clone, Deserialize)]
pub struct WarmRequest {
    pub days: u32,
    #[serde(default)]
    pub start: Option<String>,
}

impl WarmRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.days == 0 {
            return Some("days must be at least 1".to_string());
        }
        if self.days > MAX_WARM_DAYS {
            return Some(format!("days cannot exceed {}", MAX_WARM_DAYS));
        }
        None
    }
}
