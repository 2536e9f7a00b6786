//! The weather client: cache plus fetch seam, with mode-specific behavior.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, instrument};

use crate::cache::{WeatherCache, normalize_key};
use crate::convert::{WeatherReport, to_report};
use crate::fetch::{HttpFetcher, WeatherFetch};
use crate::model::CurrentWeather;
use crate::poll::{self, PollerHandle};
use crate::types::{ClientConfig, ClientMode};
use crate::{Result, WeatherError, telemetry};

/// Cached, rate-conscious access to the provider's current-conditions
/// endpoint.
///
/// In [`ClientMode::OnDemand`], the provider is contacted only when a
/// lookup misses the cache or finds a stale entry. In
/// [`ClientMode::Polling`], a background task additionally refreshes every
/// cached location each period, so lookups keep hitting warm data.
///
/// All methods take `&self` and are safe to call from any number of tasks
/// concurrently.
pub struct WeatherClient {
    mode: ClientMode,
    ttl: Duration,
    shutdown_grace: Duration,
    cache: Arc<WeatherCache>,
    fetcher: Arc<dyn WeatherFetch>,
    poller: Mutex<Option<PollerHandle>>,
}

impl WeatherClient {
    /// Create a client with the reqwest-backed [`HttpFetcher`].
    ///
    /// Rejects a blank (empty or whitespace-only) API key with
    /// [`WeatherError::Configuration`].
    ///
    /// # Panics
    ///
    /// [`ClientMode::Polling`] spawns the refresh task and therefore
    /// requires a tokio runtime context.
    pub fn new(api_key: impl Into<String>, mode: ClientMode, config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(WeatherError::Configuration(
                "API key must not be blank".to_string(),
            ));
        }
        let fetcher = Arc::new(HttpFetcher::new(api_key, &config)?);
        Ok(Self::with_fetcher(fetcher, mode, config))
    }

    /// Create a client around a custom [`WeatherFetch`] implementation.
    ///
    /// This is the seam embedders (and the integration tests) use to
    /// substitute the outbound transport.
    ///
    /// # Panics
    ///
    /// [`ClientMode::Polling`] spawns the refresh task and therefore
    /// requires a tokio runtime context.
    pub fn with_fetcher(
        fetcher: Arc<dyn WeatherFetch>,
        mode: ClientMode,
        config: ClientConfig,
    ) -> Self {
        let cache = Arc::new(WeatherCache::new(config.cache_capacity));

        let poller = match mode {
            ClientMode::Polling => Some(poll::spawn(
                Arc::clone(&cache),
                Arc::clone(&fetcher),
                config.poll_interval,
            )),
            ClientMode::OnDemand => None,
        };

        Self {
            mode,
            ttl: config.cache_ttl,
            shutdown_grace: config.shutdown_grace,
            cache,
            fetcher,
            poller: Mutex::new(poller),
        }
    }

    /// Current conditions for `location`, served from the cache when the
    /// stored entry is no older than the configured TTL.
    ///
    /// A fresh hit performs no network call in either mode. A miss or a
    /// stale entry triggers exactly one fetch; on success the result is
    /// stored and returned, on failure the error propagates unchanged and
    /// the cache is left exactly as it was (a stale entry is not evicted
    /// by a failed refresh).
    ///
    /// Concurrent lookups for the same missing or stale key each fetch
    /// independently; the last completed write determines the stored state.
    ///
    /// # Errors
    ///
    /// [`WeatherError::InvalidLocation`] for a blank location (raised
    /// before the cache or network is touched), otherwise whatever the
    /// fetch produced; see [`WeatherError`].
    #[instrument(skip(self))]
    pub async fn lookup(&self, location: &str) -> Result<CurrentWeather> {
        if location.trim().is_empty() {
            return Err(WeatherError::InvalidLocation);
        }

        let key = normalize_key(location);
        if let Some(entry) = self.cache.get(&key) {
            if entry.captured_at.elapsed() <= self.ttl {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                debug!(%key, "serving fresh cache entry");
                return Ok(entry.payload);
            }
        }

        metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
        let doc = self.fetcher.fetch(location).await?;
        self.cache.put(&key, doc.clone());
        Ok(doc)
    }

    /// Point-in-time copy of every cached document, one per location,
    /// order irrelevant. Empty if nothing is cached.
    pub fn snapshot_all(&self) -> Vec<CurrentWeather> {
        self.cache
            .snapshot_entries()
            .into_iter()
            .map(|entry| entry.payload)
            .collect()
    }

    /// [`snapshot_all`](Self::snapshot_all) flattened into report form.
    pub fn reports(&self) -> Vec<WeatherReport> {
        self.cache
            .snapshot_entries()
            .iter()
            .map(|entry| to_report(&entry.payload))
            .collect()
    }

    /// Drop every cached entry. The next lookup for any location fetches.
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Number of locations currently cached.
    pub fn size(&self) -> usize {
        self.cache.len()
    }

    /// The mode this client was created with.
    pub fn mode(&self) -> ClientMode {
        self.mode
    }

    /// Stop the background refresh task, if any. Idempotent.
    ///
    /// Cancels future firings, then waits up to the configured grace for
    /// an in-flight cycle before aborting it. On-demand fetches running on
    /// caller tasks are not interrupted.
    pub async fn shutdown(&self) {
        let poller = self.poller.lock().take();
        if let Some(poller) = poller {
            poller.shutdown(self.shutdown_grace).await;
        }
    }
}

impl Drop for WeatherClient {
    fn drop(&mut self) {
        // A client dropped without shutdown must not leak its poll task.
        if let Some(poller) = self.poller.get_mut().take() {
            poller.abort();
        }
    }
}
