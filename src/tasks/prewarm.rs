//! Prayer Cache Pre-warm Task
//!
//! Background task that warms the prayer-day cache at startup and keeps the
//! forward window warm as the local calendar day advances.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::{PrayerDayCache, PrewarmOptions};

/// Spawns the pre-warm task.
///
/// The first pass runs [`PrayerDayCache::ensure_prayer_cache_prewarmed`]
/// with `options`. After that, every `refresh_interval_secs` the forward
/// window is re-warmed from the current day; warming is idempotent, so only
/// days that entered the window since the last pass are computed.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(PrayerDayCache::new()));
/// let handle = spawn_prewarm_task(cache.clone(), PrewarmOptions::default(), 3600);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_prewarm_task(
    cache: Arc<RwLock<PrayerDayCache>>,
    options: PrewarmOptions,
    refresh_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(refresh_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Pre-warming prayer cache: {} days back, {} days forward",
            options.backfill_days, options.forward_days
        );

        let computed = {
            let mut cache_guard = cache.write().await;
            cache_guard.ensure_prayer_cache_prewarmed(options)
        };
        info!("Initial pre-warm computed {} prayer days", computed);

        let window = options.forward_days.saturating_add(1);
        loop {
            tokio::time::sleep(interval).await;

            let result = {
                let mut cache_guard = cache.write().await;
                cache_guard.warm_prayer_cache(window, None)
            };

            match result {
                Ok(0) => debug!("Pre-warm refresh: window already warm"),
                Ok(computed) => info!("Pre-warm refresh: computed {} new prayer days", computed),
                Err(err) => warn!("Pre-warm refresh failed: {}", err),
            }
        }
    })
}
