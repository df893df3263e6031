use serde::{Deserialize, Deserializer};

use super::{Coordinate, DomainError};

/// Untrusted search result as returned by the place provider.
///
/// Every field is optional. Numbers are coerced to their decimal string form
/// so `place_id: 12345` and `place_id: "12345"` read the same.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawProviderRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub place_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub display_name: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lat: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lon: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        Some(serde_json::Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

/// A validated facility with its distance from the query origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: String,
    pub position: Coordinate,
    pub distance_km: f64,
}

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category: String,
    pub limit: Option<u32>,
    pub radius_meters: Option<u32>,
}

impl NearbyQuery {
    pub fn new(latitude: Option<f64>, longitude: Option<f64>, category: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            category: category.into(),
            limit: None,
            radius_meters: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_radius_meters(mut self, radius_meters: u32) -> Self {
        self.radius_meters = Some(radius_meters);
        self
    }

    pub fn origin(&self) -> Result<Coordinate, DomainError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude),
            _ => Err(DomainError::invalid_argument(
                "Latitude and longitude are required",
            )),
        }
    }

    pub fn wants_all_categories(&self) -> bool {
        self.category.trim().eq_ignore_ascii_case(ALL_CATEGORIES)
    }
}
