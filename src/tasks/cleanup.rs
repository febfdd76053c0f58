//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired entries from a shared
//! cache.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::registry::SharedCache;

/// Spawns a background task that periodically removes expired entries.
///
/// The task loops forever, sleeping for `interval` between sweeps. Each
/// sweep takes the cache lock only for the duration of a synchronous
/// `cleanup(false)` call; valid entries are never touched.
///
/// # Returns
/// A JoinHandle for the spawned task; abort it during shutdown.
///
/// # Example
/// ```ignore
/// let cache = registry.create("analysis", None);
/// let handle = spawn_cleanup_task(cache, Duration::from_secs(1));
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(cache: SharedCache<V>, interval: Duration) -> JoinHandle<()>
where
    V: Send + 'static,
{
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "starting TTL cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            // Lock held only for the synchronous sweep, never across an await
            let summary = {
                let mut guard = cache.lock();
                guard.cleanup(false)
            };

            if summary.cleaned {
                info!(
                    removed = summary.size_before - summary.size_after,
                    "TTL cleanup removed expired entries"
                );
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
