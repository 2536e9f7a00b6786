//! Tests for [`WeatherCache`], the bounded store with oldest-capture eviction.
//!
//! Time-sensitive tests run on the paused tokio clock so capture order is
//! fully deterministic.

use std::time::Duration;

use serde_json::json;
use vedrfolnir::CurrentWeather;
use vedrfolnir::cache::{WeatherCache, normalize_key};

fn doc(name: &str) -> CurrentWeather {
    serde_json::from_value(json!({
        "weather": [{"main": "Clear", "description": "clear sky"}],
        "main": {"temp": 11.0, "feels_like": 10.2, "pressure": 1018, "humidity": 55},
        "dt": 1726660000,
        "name": name
    }))
    .expect("sample document should decode")
}

/// Advance the paused clock so consecutive puts get distinct capture times.
async fn tick() {
    tokio::time::advance(Duration::from_secs(1)).await;
}

// =========================================================================
// Basic operations
// =========================================================================

#[tokio::test]
async fn get_on_empty_cache_is_none() {
    let cache = WeatherCache::new(10);
    assert!(cache.get("oslo").is_none());
    assert!(cache.is_empty());
}

#[tokio::test]
async fn put_then_get_returns_entry() {
    let cache = WeatherCache::new(10);
    cache.put("oslo", doc("Oslo"));

    let entry = cache.get("oslo").expect("entry should be present");
    assert_eq!(entry.payload.name, "Oslo");
    assert_eq!(cache.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn overwrite_keeps_size_and_advances_timestamp() {
    let cache = WeatherCache::new(10);
    cache.put("oslo", doc("Oslo"));
    let first = cache.get("oslo").unwrap().captured_at;

    tick().await;
    cache.put("oslo", doc("Oslo"));

    let second = cache.get("oslo").unwrap().captured_at;
    assert!(second > first, "refresh must advance the capture time");
    assert_eq!(cache.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn get_does_not_touch_timestamp() {
    let cache = WeatherCache::new(10);
    cache.put("oslo", doc("Oslo"));
    let before = cache.get("oslo").unwrap().captured_at;

    tick().await;
    let after = cache.get("oslo").unwrap().captured_at;
    assert_eq!(before, after, "reads must not refresh entries");
}

#[tokio::test]
async fn clear_empties_the_store() {
    let cache = WeatherCache::new(10);
    cache.put("oslo", doc("Oslo"));
    cache.put("bergen", doc("Bergen"));

    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.get("oslo").is_none());
}

// =========================================================================
// Capacity and eviction
// =========================================================================

#[tokio::test(start_paused = true)]
async fn capacity_is_never_exceeded_and_oldest_is_evicted() {
    let cache = WeatherCache::new(10);
    for i in 0..=10 {
        cache.put(&format!("city{i}"), doc(&format!("City{i}")));
        tick().await;
        assert!(cache.len() <= 10, "size must never exceed capacity");
    }

    assert_eq!(cache.len(), 10);
    assert!(
        cache.get("city0").is_none(),
        "the oldest-captured entry must be the one evicted"
    );
    for i in 1..=10 {
        assert!(cache.get(&format!("city{i}")).is_some());
    }
}

#[tokio::test(start_paused = true)]
async fn refreshed_entry_is_protected_from_eviction() {
    let cache = WeatherCache::new(10);
    for i in 0..10 {
        cache.put(&format!("city{i}"), doc(&format!("City{i}")));
        tick().await;
    }

    // city0 is the oldest until this refresh makes it the newest.
    cache.put("city0", doc("City0"));
    tick().await;
    cache.put("city10", doc("City10"));

    assert_eq!(cache.len(), 10);
    assert!(cache.get("city0").is_some(), "refreshed entry must survive");
    assert!(
        cache.get("city1").is_none(),
        "the now-oldest entry must be evicted instead"
    );
}

#[tokio::test(start_paused = true)]
async fn overwrite_at_capacity_evicts_nothing() {
    let cache = WeatherCache::new(10);
    for i in 0..10 {
        cache.put(&format!("city{i}"), doc(&format!("City{i}")));
        tick().await;
    }

    cache.put("city5", doc("City5"));

    assert_eq!(cache.len(), 10);
    for i in 0..10 {
        assert!(cache.get(&format!("city{i}")).is_some());
    }
}

// =========================================================================
// Snapshots
// =========================================================================

#[tokio::test]
async fn snapshots_are_point_in_time_copies() {
    let cache = WeatherCache::new(10);
    cache.put("oslo", doc("Oslo"));
    cache.put("bergen", doc("Bergen"));

    let keys = cache.snapshot_keys();
    let entries = cache.snapshot_entries();

    cache.clear();

    assert_eq!(keys.len(), 2);
    assert_eq!(entries.len(), 2);
    assert!(keys.contains(&"oslo".to_string()));
    assert!(keys.contains(&"bergen".to_string()));
}

// =========================================================================
// Key normalization
// =========================================================================

#[test]
fn variants_normalize_to_the_same_key() {
    assert_eq!(normalize_key("  Paris "), normalize_key("PARIS"));
    assert_ne!(normalize_key("Paris"), normalize_key("London"));
}
