//! Outbound fetch seam and its HTTP implementation.
//!
//! [`WeatherFetch`] is the trait the client and poller call through; the
//! shipped implementation is [`HttpFetcher`]. Exactly one attempt is made
//! per call; retry, if desired, belongs to the caller.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, warn};

use crate::model::CurrentWeather;
use crate::types::ClientConfig;
use crate::{Result, WeatherError, telemetry, version};

/// A single-attempt fetch of current conditions for a location.
///
/// Implement this to substitute the outbound transport (the integration
/// tests drive the client through scripted implementations).
#[async_trait]
pub trait WeatherFetch: Send + Sync {
    /// Fetch the current-conditions document for `location`.
    ///
    /// The location is passed through as given; key normalization is the
    /// cache's concern, not the transport's.
    async fn fetch(&self, location: &str) -> Result<CurrentWeather>;
}

/// Reqwest-backed [`WeatherFetch`] implementation.
///
/// Issues one GET per call carrying the location, the API key, and the
/// configured unit system, with the configured connect/response timeout
/// applied to each attempt.
pub struct HttpFetcher {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    units: String,
}

impl HttpFetcher {
    /// Build a fetcher for the given credential and configuration.
    pub fn new(api_key: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.request_timeout)
            .timeout(config.request_timeout)
            .user_agent(version::user_agent())
            .build()
            .map_err(|e| {
                WeatherError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: config.base_url.clone(),
            units: config.units.clone(),
        })
    }

    async fn fetch_inner(&self, location: &str) -> Result<CurrentWeather> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        match status {
            200 => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| WeatherError::Network(e.to_string()))?;
                let doc = serde_json::from_str::<CurrentWeather>(&body)?;
                debug!(%location, city = %doc.name, "fetched current conditions");
                Ok(doc)
            }
            401 => Err(WeatherError::AuthenticationFailed),
            404 => Err(WeatherError::LocationNotFound(location.to_string())),
            429 => Err(WeatherError::RateLimited),
            500 | 502 | 503 => Err(WeatherError::ServiceUnavailable { status }),
            other => Err(WeatherError::UnexpectedStatus(other)),
        }
    }

    fn record_request(start: Instant, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        metrics::counter!(telemetry::REQUESTS_TOTAL, "status" => status).increment(1);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS)
            .record(start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl WeatherFetch for HttpFetcher {
    async fn fetch(&self, location: &str) -> Result<CurrentWeather> {
        let start = Instant::now();
        let result = self.fetch_inner(location).await;
        Self::record_request(start, result.is_ok());
        if let Err(ref e) = result {
            warn!(%location, error = %e, "fetch failed");
        }
        result
    }
}
