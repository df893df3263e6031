use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{NearbyQuery, Place, ALL_CATEGORIES};
use crate::error::{AppError, AppResult};

pub const MISSING_COORDINATES_MESSAGE: &str = "Latitude and longitude are required";
pub const INVALID_COORDINATES_MESSAGE: &str = "Latitude and longitude must be valid numbers";

/// Query string of `GET /api/v1/places/nearby`.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyQueryParams {
    /// Latitude in decimal degrees.
    pub lat: Option<String>,
    /// Longitude in decimal degrees.
    pub lng: Option<String>,
    /// Facility category, or `all` for the default emergency set.
    #[serde(rename = "type")]
    #[validate(length(max = 64, message = "type must be at most 64 characters"))]
    pub place_type: Option<String>,
    #[validate(range(min = 1, max = 50, message = "limit must be between 1 and 50"))]
    pub limit: Option<u32>,
    /// Search radius in metres. Providers treat it as a hint.
    #[validate(range(
        min = 100,
        max = 50000,
        message = "radius must be between 100 and 50000 meters"
    ))]
    pub radius: Option<u32>,
}

impl NearbyQueryParams {
    pub fn into_query(self) -> AppResult<NearbyQuery> {
        let (Some(lat), Some(lng)) = (non_blank(self.lat), non_blank(self.lng)) else {
            return Err(AppError::BadRequest(MISSING_COORDINATES_MESSAGE.to_string()));
        };

        let latitude = parse_coordinate(&lat)?;
        let longitude = parse_coordinate(&lng)?;
        let category = non_blank(self.place_type).unwrap_or_else(|| ALL_CATEGORIES.to_string());

        let mut query = NearbyQuery::new(Some(latitude), Some(longitude), category);
        if let Some(limit) = self.limit {
            query = query.with_limit(limit);
        }
        if let Some(radius) = self.radius {
            query = query.with_radius_meters(radius);
        }
        Ok(query)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_coordinate(raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| AppError::BadRequest(INVALID_COORDINATES_MESSAGE.to_string()))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: String,
    /// `[latitude, longitude]`
    #[schema(value_type = Vec<f64>)]
    pub position: [f64; 2],
    /// Great-circle distance from the query origin in kilometres.
    pub distance: f64,
}

impl From<Place> for PlaceResponse {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            name: place.name,
            place_type: place.category,
            position: place.position.as_pair(),
            distance: place.distance_km,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
