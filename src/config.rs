//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::PrewarmOptions;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The location and calculation method are fixed and not configurable here.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Days before today covered by the startup pre-warm
    pub prewarm_backfill_days: u32,
    /// Days after today covered by the startup pre-warm
    pub prewarm_forward_days: u32,
    /// Whether the pre-warm task runs at startup
    pub prewarm_on_startup: bool,
    /// Interval in seconds between rolling re-warms of the forward window
    pub refresh_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PREWARM_BACKFILL_DAYS` - Days warmed before today (default: 7)
    /// - `PREWARM_FORWARD_DAYS` - Days warmed after today (default: 366)
    /// - `PREWARM_ON_STARTUP` - Run the pre-warm task (default: true)
    /// - `REFRESH_INTERVAL` - Re-warm frequency in seconds (default: 3600)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            prewarm_backfill_days: env_or("PREWARM_BACKFILL_DAYS", defaults.prewarm_backfill_days),
            prewarm_forward_days: env_or("PREWARM_FORWARD_DAYS", defaults.prewarm_forward_days),
            prewarm_on_startup: env_or("PREWARM_ON_STARTUP", defaults.prewarm_on_startup),
            refresh_interval: env_or("REFRESH_INTERVAL", defaults.refresh_interval),
        }
    }

    /// Pre-warm window derived from this configuration.
    pub fn prewarm_options(&self) -> PrewarmOptions {
        PrewarmOptions {
            backfill_days: self.prewarm_backfill_days,
            forward_days: self.prewarm_forward_days,
            force: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            prewarm_backfill_days: 7,
            prewarm_forward_days: 366,
            prewarm_on_startup: true,
            refresh_interval: 3600,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
