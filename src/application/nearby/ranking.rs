use std::cmp::Ordering;

use crate::domain::{distance_km, Coordinate, Place};

pub fn attach_distances(origin: Coordinate, places: &mut [Place]) {
    for place in places.iter_mut() {
        place.distance_km = distance_km(origin, place.position);
    }
}

/// Stable ascending sort by distance. A NaN distance orders as 0.
pub fn sort_by_distance(places: &mut [Place]) {
    places.sort_by(|left, right| compare_distance(left.distance_km, right.distance_km));
}

fn sort_key(distance_km: f64) -> f64 {
    if distance_km.is_nan() {
        0.0
    } else {
        distance_km
    }
}

fn compare_distance(left: f64, right: f64) -> Ordering {
    sort_key(left)
        .partial_cmp(&sort_key(right))
        .unwrap_or(Ordering::Equal)
}

pub fn rank(origin: Coordinate, mut places: Vec<Place>) -> Vec<Place> {
    attach_distances(origin, &mut places);
    sort_by_distance(&mut places);
    places
}
