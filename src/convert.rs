//! Flattening of provider documents into the public report shape.

use serde::Serialize;

use crate::model::CurrentWeather;

/// Flattened, presentation-friendly view of a [`CurrentWeather`] document.
///
/// Collapses the provider's nested blocks into one level, keeping the first
/// condition group (the provider lists the dominant one first).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub conditions: String,
    pub description: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub wind_speed: f64,
    pub visibility: Option<u32>,
    /// Unix timestamp (UTC) of the observation.
    pub observed_at: i64,
    pub sunrise: i64,
    pub sunset: i64,
    /// Shift from UTC in seconds.
    pub timezone: i32,
}

/// Map a provider document to its flattened report.
pub fn to_report(doc: &CurrentWeather) -> WeatherReport {
    let conditions = doc.weather.first();
    WeatherReport {
        city: doc.name.clone(),
        conditions: conditions.map(|c| c.main.clone()).unwrap_or_default(),
        description: conditions.map(|c| c.description.clone()).unwrap_or_default(),
        temperature: doc.main.temp,
        feels_like: doc.main.feels_like,
        wind_speed: doc.wind.speed,
        visibility: doc.visibility,
        observed_at: doc.dt,
        sunrise: doc.sys.sunrise,
        sunset: doc.sys.sunset,
        timezone: doc.timezone,
    }
}
