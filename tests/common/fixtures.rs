#![allow(dead_code)]

use swasthya_backend::domain::RawProviderRecord;

pub const NEW_YORK: (f64, f64) = (40.7128, -74.0060);

pub fn record(id: &str, name: &str, category: &str, lat: f64, lon: f64) -> RawProviderRecord {
    RawProviderRecord {
        place_id: Some(id.to_string()),
        display_name: Some(name.to_string()),
        category: Some(category.to_string()),
        lat: Some(lat.to_string()),
        lon: Some(lon.to_string()),
    }
}

/// Three hospitals due north of the origin at roughly 5, 1 and 3 km,
/// deliberately out of order.
pub fn unordered_hospitals(origin_lat: f64, origin_lon: f64) -> Vec<RawProviderRecord> {
    vec![
        record("far", "Far Hospital", "hospital", origin_lat + 0.045, origin_lon),
        record("near", "Near Hospital", "hospital", origin_lat + 0.009, origin_lon),
        record("mid", "Mid Hospital", "hospital", origin_lat + 0.027, origin_lon),
    ]
}

pub fn new_york_hospitals() -> Vec<RawProviderRecord> {
    vec![
        record(
            "1001",
            "Bellevue Hospital, 462 1st Ave, New York",
            "hospital",
            40.7390,
            -73.9754,
        ),
        record(
            "1002",
            "NewYork-Presbyterian Lower Manhattan Hospital, 170 William St",
            "hospital",
            40.7105,
            -74.0049,
        ),
    ]
}
