//! Background refresh task for polling mode.
//!
//! One task per polling-mode client. Every period it snapshots the cached
//! keys and refetches each one unconditionally: freshness checks are the
//! on-demand path's concern, the poller's job is to keep everything warm.
//! A failed key is logged and skipped; the cycle continues and the prior
//! entry stays in place.
//!
//! The first cycle fires after one full period, not at spawn. Cancellation
//! is signalled through a watch channel; an in-flight cycle is allowed to
//! finish within the shutdown grace before the task is aborted.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::cache::WeatherCache;
use crate::fetch::WeatherFetch;
use crate::telemetry;

/// Handle to a spawned poll task: cancellation signal plus join handle.
pub(crate) struct PollerHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Cancel future firings and wait up to `grace` for the task to stop,
    /// aborting it if an in-flight cycle overruns.
    pub(crate) async fn shutdown(mut self, grace: Duration) {
        let _ = self.cancel.send(true);
        if tokio::time::timeout(grace, &mut self.task).await.is_err() {
            warn!("poll task did not stop within grace period, aborting");
            self.task.abort();
        }
    }

    /// Stop the task immediately, without grace. Used on drop.
    pub(crate) fn abort(self) {
        self.task.abort();
    }
}

/// Spawn the periodic refresh task.
///
/// # Panics
///
/// Requires a tokio runtime context.
pub(crate) fn spawn(
    cache: Arc<WeatherCache>,
    fetcher: Arc<dyn WeatherFetch>,
    period: Duration,
) -> PollerHandle {
    let (cancel, mut cancelled) = watch::channel(false);

    // Pin the first deadline to spawn time, not to the task's first poll.
    let first_tick = Instant::now() + period;

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancelled.changed() => break,
                _ = ticker.tick() => refresh_all(&cache, fetcher.as_ref()).await,
            }
        }
        debug!("poll task stopped");
    });

    PollerHandle { cancel, task }
}

/// One refresh cycle: refetch every key currently in the cache.
async fn refresh_all(cache: &WeatherCache, fetcher: &dyn WeatherFetch) {
    metrics::counter!(telemetry::POLL_CYCLES_TOTAL).increment(1);

    for key in cache.snapshot_keys() {
        match fetcher.fetch(&key).await {
            Ok(doc) => {
                cache.put(&key, doc);
                metrics::counter!(telemetry::POLL_REFRESHES_TOTAL).increment(1);
            }
            Err(e) => {
                // Keep the previous entry for this key; the rest of the
                // cycle proceeds.
                metrics::counter!(telemetry::POLL_FAILURES_TOTAL).increment(1);
                warn!(%key, error = %e, "poll refresh failed");
            }
        }
    }
}
