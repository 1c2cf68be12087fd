//! Response DTOs for the prayer-time API
//!
//! Defines the structure of outgoing HTTP response bodies. Successful
//! bodies carry `ok: true`, errors `ok: false`.

use serde::Serialize;

use crate::cache::{CacheStats, PrayerDay};

/// Response body for GET /prayer-times and GET /prayer-times/shamsi/:date
#[derive(Debug, Clone, Serialize)]
pub struct PrayerDayResponse {
    pub ok: bool,
    pub day: PrayerDay,
}

impl PrayerDayResponse {
    pub fn new(day: PrayerDay) -> Self {
        Self { ok: true, day }
    }
}

/// Response body for POST /prayer-times/warm
#[derive(Debug, Clone, Serialize)]
pub struct WarmResponse {
    pub ok: bool,
    /// Entries newly computed by this request
    pub computed: usize,
    /// Entries cached after the request
    pub total_entries: usize,
}

impl WarmResponse {
    pub fn new(computed: usize, total_entries: usize) -> Self {
        Self {
            ok: true,
            computed,
            total_entries,
        }
    }
}

/// Response body for DELETE /prayer-times/cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub ok: bool,
    pub message: String,
}

impl ClearResponse {
    pub fn new(dropped: usize) -> Self {
        Self {
            ok: true,
            message: format!("Prayer cache cleared ({} entries dropped)", dropped),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    /// Days computed since startup, including warming
    pub computed: u64,
    pub total_entries: usize,
    pub prewarmed: bool,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            computed: stats.computed,
            total_entries: stats.total_entries,
            prewarmed: stats.prewarmed,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    /// Machine-readable error code, e.g. `invalid_date`
    pub error: String,
    /// Human-readable description
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::prayer::calculate_prayer_times;

    #[test]
    fn test_prayer_day_response_serialize() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let resp = PrayerDayResponse::new(PrayerDay::new(date, calculate_prayer_times(date)));
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["ok"], true);
        assert_eq!(json["day"]["date"], "2026-10-17");
        assert!(json["day"]["times"]["zuhr"].is_string());
    }

    #[test]
    fn test_stats_response_from_stats() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            computed: 25,
            total_entries: 25,
            prewarmed: true,
        };
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert!(resp.prewarmed);
    }

    #[test]
    fn test_clear_response_serialize() {
        let json = serde_json::to_string(&ClearResponse::new(12)).unwrap();
        assert!(json.contains("\"ok\":true"));
        assert!(json.contains("12 entries"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("invalid_date", "Invalid date: soon");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"ok\":false"));
        assert!(json.contains("invalid_date"));
    }
}
