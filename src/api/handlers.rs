//! API Handlers
//!
//! HTTP request handlers for each prayer-time endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::PrayerDayCache;
use crate::error::{PrayerError, Result};
use crate::models::{
    ClearResponse, HealthResponse, PrayerDayQuery, PrayerDayResponse, StatsResponse, WarmRequest,
    WarmResponse,
};

/// Application state shared across all handlers.
///
/// Contains the prayer-day cache wrapped in Arc<RwLock<>> so lookups that
/// miss can insert under the write lock.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<RwLock<PrayerDayCache>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: PrayerDayCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PrayerDayCache::new())
    }
}

/// Handler for GET /prayer-times
///
/// Returns the prayer day for `?date=` (date, instant, or local date-time),
/// or today when no date is given.
pub async fn prayer_day_handler(
    State(state): State<AppState>,
    Query(query): Query<PrayerDayQuery>,
) -> Result<Json<PrayerDayResponse>> {
    // Write lock: a miss inserts the computed day
    let mut cache = state.cache.write().await;
    let day = cache.get_prayer_day(query.date.as_deref())?;

    Ok(Json(PrayerDayResponse::new(day)))
}

/// Handler for GET /prayer-times/shamsi/:date
///
/// Hydrates a Shamsi `YYYY-MM-DD` date and returns that day's prayer times.
pub async fn shamsi_day_handler(
    State(state): State<AppState>,
    Path(shamsi): Path<String>,
) -> Result<Json<PrayerDayResponse>> {
    let date = PrayerDayCache::hydrate_shamsi_date(&shamsi)?;

    let mut cache = state.cache.write().await;
    let day = cache.get_or_compute(date);

    Ok(Json(PrayerDayResponse::new(day)))
}

/// Handler for POST /prayer-times/warm
///
/// Ensures a range of days is cached; already-cached days are skipped.
pub async fn warm_handler(
    State(state): State<AppState>,
    Json(req): Json<WarmRequest>,
) -> Result<Json<WarmResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(PrayerError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    let computed = cache.warm_prayer_cache(req.days, req.start.as_deref())?;

    Ok(Json(WarmResponse::new(computed, cache.len())))
}

/// Handler for DELETE /prayer-times/cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let dropped = cache.len();
    cache.clear_prayer_cache();

    Json(ClearResponse::new(dropped))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
