pub mod places;

pub use places::{DisabledPlaceProvider, HttpPlaceProvider, PlaceProvider};
