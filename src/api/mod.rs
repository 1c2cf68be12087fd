//! API Module
//!
//! HTTP handlers and routing for the prayer-time JSON API.
//!
//! # Endpoints
//! - `GET /prayer-times?date=` - Prayer day for a date (default: today)
//! - `GET /prayer-times/shamsi/:date` - Prayer day for a Shamsi date
//! - `POST /prayer-times/warm` - Pre-compute a range of days
//! - `DELETE /prayer-times/cache` - Drop every cached day
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
