//! Request and Response models for the prayer-time API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{PrayerDayQuery, WarmRequest};
pub use responses::{
    ClearResponse, ErrorResponse, HealthResponse, PrayerDayResponse, StatsResponse, WarmResponse,
};
