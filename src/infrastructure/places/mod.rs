pub mod client;
pub mod traits;


pub use client::{DisabledPlaceProvider, HttpPlaceProvider};
pub use traits::PlaceProvider;
