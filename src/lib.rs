//! Vedrfolnir - cached client for the OpenWeather current-conditions API
//!
//! This crate wraps the provider's REST endpoint behind a bounded,
//! concurrency-safe cache so that embedding applications stay well inside
//! the provider's rate limits. Clients run in one of two modes:
//!
//! - [`ClientMode::OnDemand`] — the provider is contacted only when a
//!   lookup misses the cache or finds an entry older than the TTL.
//! - [`ClientMode::Polling`] — a background task additionally refreshes
//!   every cached location on a fixed period, so lookups keep hitting
//!   warm data.
//!
//! Clients are handed out by a [`WeatherRegistry`], which guarantees at
//! most one live client per API key and offers aggregate shutdown.
//!
//! # Example
//!
//! ```rust,no_run
//! use vedrfolnir::{ClientMode, WeatherRegistry, to_report};
//!
//! #[tokio::main]
//! async fn main() -> vedrfolnir::Result<()> {
//!     let registry = WeatherRegistry::new();
//!     let client = registry.create("your-api-key", ClientMode::OnDemand)?;
//!
//!     let current = client.lookup("London").await?;
//!     let report = to_report(&current);
//!     println!("{}: {:.1}°C, {}", report.city, report.temperature, report.description);
//!
//!     registry.shutdown_all().await;
//!     Ok(())
//! }
//! ```
//!
//! # Telemetry
//!
//! Operations emit `tracing` events and `metrics` counters/histograms
//! (names in [`telemetry`]); both are no-ops until the embedding
//! application installs a subscriber/recorder.

pub mod cache;
pub mod convert;
pub mod error;
pub mod fetch;
pub mod model;
mod poll;
pub mod registry;
pub mod telemetry;
pub mod types;
pub mod version;

mod client;

// Re-export main types at crate root
pub use cache::{CacheEntry, WeatherCache, normalize_key};
pub use client::WeatherClient;
pub use convert::{WeatherReport, to_report};
pub use error::{Result, WeatherError};
pub use fetch::{HttpFetcher, WeatherFetch};
pub use model::{Conditions, CurrentWeather, Readings, Sys, Wind};
pub use registry::WeatherRegistry;
pub use types::{ClientConfig, ClientMode, DEFAULT_BASE_URL};
