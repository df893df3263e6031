pub mod coordinate;
pub mod errors;
pub mod place;

pub use coordinate::{distance_km, Coordinate, EARTH_RADIUS_KM};
pub use errors::DomainError;
pub use place::{NearbyQuery, Place, RawProviderRecord, ALL_CATEGORIES};
