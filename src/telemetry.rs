//! Telemetry metric name constants.
//!
//! Centralised metric names for vedrfolnir operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `vedrfolnir_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `status` — outcome of an outbound request: "ok" or "error"

/// Total outbound requests issued against the provider.
///
/// Labels: `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "vedrfolnir_requests_total";

/// Outbound request duration in seconds.
pub const REQUEST_DURATION_SECONDS: &str = "vedrfolnir_request_duration_seconds";

/// Total lookups answered from the cache without a provider call.
pub const CACHE_HITS_TOTAL: &str = "vedrfolnir_cache_hits_total";

/// Total lookups that had to go to the provider (missing or stale entry).
pub const CACHE_MISSES_TOTAL: &str = "vedrfolnir_cache_misses_total";

/// Total entries evicted to make room at capacity.
pub const CACHE_EVICTIONS_TOTAL: &str = "vedrfolnir_cache_evictions_total";

/// Total background refresh cycles started.
pub const POLL_CYCLES_TOTAL: &str = "vedrfolnir_poll_cycles_total";

/// Total cached entries refreshed by the background task.
pub const POLL_REFRESHES_TOTAL: &str = "vedrfolnir_poll_refreshes_total";

/// Total per-key refresh failures in the background task.
pub const POLL_FAILURES_TOTAL: &str = "vedrfolnir_poll_failures_total";
