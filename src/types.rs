//! Client mode and configuration.

use std::time::Duration;

/// Default provider endpoint for current conditions.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Operating mode of a [`WeatherClient`](crate::WeatherClient).
///
/// Fixed at creation time for the lifetime of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientMode {
    /// Fetch only in response to a caller's lookup of a stale or missing key.
    OnDemand,
    /// A background task additionally refreshes every cached key on a fixed
    /// period, independent of caller activity.
    Polling,
}

/// Configuration for a [`WeatherClient`](crate::WeatherClient).
///
/// The defaults match the provider's published guidance: a 10-entry cache,
/// 10-minute freshness window and poll period, 10-second request timeouts.
///
/// ```rust
/// # use vedrfolnir::ClientConfig;
/// # use std::time::Duration;
/// let config = ClientConfig::new()
///     .cache_capacity(25)
///     .cache_ttl(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint the outbound GET is issued against. Default: [`DEFAULT_BASE_URL`].
    pub base_url: String,
    /// Unit system requested from the provider. Default: `metric`.
    pub units: String,
    /// Maximum number of cached locations. Default: 10.
    pub cache_capacity: usize,
    /// Maximum age after which a cached entry is treated as stale on read.
    /// Default: 10 minutes.
    pub cache_ttl: Duration,
    /// Period of the background refresh task in polling mode. The first
    /// cycle fires after one full period. Default: 10 minutes.
    pub poll_interval: Duration,
    /// Connect and response timeout applied to each outbound request.
    /// Default: 10 seconds.
    pub request_timeout: Duration,
    /// How long shutdown waits for an in-flight poll cycle before forcing
    /// cancellation. Default: 5 seconds.
    pub shutdown_grace: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            units: "metric".to_string(),
            cache_capacity: 10,
            cache_ttl: Duration::from_secs(10 * 60),
            poll_interval: Duration::from_secs(10 * 60),
            request_timeout: Duration::from_secs(10),
            shutdown_grace: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    /// Create a new config with the defaults above.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different endpoint (e.g. a mock server in tests).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the unit system requested from the provider.
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Set the maximum number of cached locations.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the freshness window for cached entries.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the background refresh period for polling mode.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the per-request connect and response timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the grace period shutdown grants an in-flight poll cycle.
    pub fn shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }
}
