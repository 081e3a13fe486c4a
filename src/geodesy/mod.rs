//! Spherical earth model: geographic points, destination points and measurement.

mod destination;
mod measure;

pub use destination::{
    destination_point, great_circle_destination, normalize_longitude, rhumb_destination,
};
pub use measure::{
    central_angle, geodesic_area, great_circle_arc, haversine_distance, initial_bearing, path_length,
};

/// Equatorial earth radius in metres, used for destination points and areas.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Mean earth radius in metres, used for haversine distances.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_000.0;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new geographic point.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns whether both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<[f64; 2]> for LatLng {
    /// Interprets `[lat, lng]`.
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}
