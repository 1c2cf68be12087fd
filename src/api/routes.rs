//! API Routes
//!
//! Configures the Axum router with all prayer-time endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, health_handler, prayer_day_handler, shamsi_day_handler, stats_handler,
    warm_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin; the dashboard is served from elsewhere
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/prayer-times", get(prayer_day_handler))
        .route("/prayer-times/shamsi/:date", get(shamsi_day_handler))
        .route("/prayer-times/warm", post(warm_handler))
        .route("/prayer-times/cache", delete(clear_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
