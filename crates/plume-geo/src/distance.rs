//! Great-circle distances.

use plume_core::{LngLat, PathPoint};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two positions, in kilometres.
pub fn haversine_km(a: LngLat, b: LngLat) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    // Clamp guards against h drifting past 1.0 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}

/// Sum of haversine distances between consecutive points.
///
/// Paths with fewer than two points have length `0`.
pub fn path_length_km(path: &[PathPoint]) -> f64 {
    path.windows(2)
        .map(|w| haversine_km(w[0].position(), w[1].position()))
        .sum()
}
