//! Tests for the document-to-report flattening.

use serde_json::json;
use vedrfolnir::{CurrentWeather, to_report};

fn full_document() -> CurrentWeather {
    serde_json::from_value(json!({
        "weather": [
            {"main": "Rain", "description": "light rain"},
            {"main": "Mist", "description": "mist"}
        ],
        "main": {
            "temp": 9.3,
            "feels_like": 7.8,
            "temp_min": 8.0,
            "temp_max": 10.5,
            "pressure": 1009,
            "humidity": 87
        },
        "visibility": 8000,
        "wind": {"speed": 6.2, "deg": 210, "gust": 9.4},
        "dt": 1726660000,
        "sys": {"sunrise": 1726630000, "sunset": 1726674000},
        "timezone": 7200,
        "name": "Helsinki"
    }))
    .expect("sample document should decode")
}

#[test]
fn maps_every_field() {
    let report = to_report(&full_document());

    assert_eq!(report.city, "Helsinki");
    assert_eq!(report.conditions, "Rain");
    assert_eq!(report.description, "light rain");
    assert_eq!(report.temperature, 9.3);
    assert_eq!(report.feels_like, 7.8);
    assert_eq!(report.wind_speed, 6.2);
    assert_eq!(report.visibility, Some(8000));
    assert_eq!(report.observed_at, 1726660000);
    assert_eq!(report.sunrise, 1726630000);
    assert_eq!(report.sunset, 1726674000);
    assert_eq!(report.timezone, 7200);
}

#[test]
fn keeps_the_first_condition_group() {
    let report = to_report(&full_document());
    assert_eq!(report.conditions, "Rain", "the dominant group is listed first");
}

#[test]
fn empty_condition_list_yields_empty_strings() {
    let doc: CurrentWeather = serde_json::from_value(json!({
        "main": {"temp": 1.0},
        "dt": 1726660000,
        "name": "Nowhere"
    }))
    .expect("minimal document should decode");

    let report = to_report(&doc);
    assert_eq!(report.conditions, "");
    assert_eq!(report.description, "");
    assert_eq!(report.visibility, None);
}

#[test]
fn report_serializes_to_json() {
    let value = serde_json::to_value(to_report(&full_document())).expect("report should serialize");
    assert_eq!(value["city"], "Helsinki");
    assert_eq!(value["temperature"], 9.3);
}
