//! Cache Sweep Task
//!
//! Background task that periodically removes expired response cache
//! entries. Expiry is otherwise lazy, so without the sweep stale entries
//! would sit in memory until overwritten.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResponseCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Each sweep acquires a write lock on the response cache
/// to drop expired entries.
///
/// # Arguments
/// * `store` - Arc<RwLock<ResponseCache>> shared reference to the cache
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task(
    store: Arc<RwLock<ResponseCache>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and purge expired entries
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.purge_expired()
            };

            // Log sweep statistics
            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
