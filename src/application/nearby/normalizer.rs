use crate::domain::{Coordinate, Place, RawProviderRecord};

/// Turns raw provider records into places, dropping any record without a
/// usable position. Output order follows input order. Distances are left at
/// zero for the resolver to fill in.
pub fn normalize(raw: Vec<RawProviderRecord>) -> Vec<Place> {
    raw.into_iter().filter_map(normalize_record).collect()
}

pub fn normalize_record(record: RawProviderRecord) -> Option<Place> {
    let latitude = parse_degrees(record.lat.as_deref())?;
    let longitude = parse_degrees(record.lon.as_deref())?;
    let position = Coordinate::new(latitude, longitude).ok()?;

    Some(Place {
        id: record.place_id.unwrap_or_default(),
        name: record.display_name.unwrap_or_default(),
        category: record.category.unwrap_or_default(),
        position,
        distance_km: 0.0,
    })
}

fn parse_degrees(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}
