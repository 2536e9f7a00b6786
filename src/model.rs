//! Wire model for the provider's current-conditions document.
//!
//! Mirrors the JSON shape returned by the provider's `/weather` endpoint.
//! Unknown fields are ignored; `main` and `dt` are the only fields a valid
//! document must carry. The cache, client, and poller treat the decoded
//! document as an opaque payload; only [`convert`](crate::convert) looks
//! inside it.

use serde::{Deserialize, Serialize};

/// A decoded current-conditions document, as returned by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Condition groups (e.g. "Clouds"). The provider sends at least one,
    /// but the shape permits an empty list.
    #[serde(default)]
    pub weather: Vec<Conditions>,
    /// Temperature, pressure, and humidity readings.
    pub main: Readings,
    /// Visibility in metres, when reported.
    #[serde(default)]
    pub visibility: Option<u32>,
    #[serde(default)]
    pub wind: Wind,
    /// Unix timestamp (UTC) of the observation.
    pub dt: i64,
    #[serde(default)]
    pub sys: Sys,
    /// Shift from UTC in seconds for the location.
    #[serde(default)]
    pub timezone: i32,
    /// City name as the provider resolves it.
    #[serde(default)]
    pub name: String,
}

/// One condition group: a headline plus a longer description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conditions {
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
}

/// Main measurement block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Readings {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: f64,
    #[serde(default)]
    pub temp_min: f64,
    #[serde(default)]
    pub temp_max: f64,
    #[serde(default)]
    pub pressure: i32,
    #[serde(default)]
    pub humidity: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: i32,
    #[serde(default)]
    pub gust: Option<f64>,
}

/// Sunrise/sunset block, unix timestamps (UTC).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub sunrise: i64,
    #[serde(default)]
    pub sunset: i64,
}
