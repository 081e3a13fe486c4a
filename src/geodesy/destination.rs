use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::LatLng;
use crate::math::angle::normalize_degrees;

/// Below this isometric-latitude difference a rhumb line is treated as due east/west.
const RHUMB_EW_EPS: f64 = 1e-11;

/// Wraps a longitude into `(-180, 180]`.
#[must_use]
pub fn normalize_longitude(lng: f64) -> f64 {
    let wrapped = normalize_degrees(lng + 180.0) - 180.0;
    if wrapped <= -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Returns the point `distance` away from `origin` along `bearing`.
///
/// `bearing` is in degrees clockwise from north, `distance` and `radius` share
/// a unit. `rhumb` selects a constant-bearing path instead of a great circle.
#[must_use]
pub fn destination_point(
    origin: LatLng,
    distance: f64,
    bearing: f64,
    radius: f64,
    rhumb: bool,
) -> LatLng {
    if rhumb {
        rhumb_destination(origin, distance, bearing, radius)
    } else {
        great_circle_destination(origin, distance, bearing, radius)
    }
}

/// Destination along a great circle (spherical law of cosines).
#[must_use]
pub fn great_circle_destination(origin: LatLng, distance: f64, bearing: f64, radius: f64) -> LatLng {
    let delta = distance / radius;
    let theta = bearing.to_radians();
    let phi1 = origin.lat.to_radians();
    let lambda1 = origin.lng.to_radians();

    let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
    let phi2 = sin_phi2.clamp(-1.0, 1.0).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    LatLng::new(phi2.to_degrees(), normalize_longitude(lambda2.to_degrees()))
}

/// Destination along a rhumb line (constant bearing).
///
/// Uses the difference in isometric latitude to scale the longitude change.
/// Latitudes pushed past a pole are reflected back onto the sphere.
#[must_use]
pub fn rhumb_destination(origin: LatLng, distance: f64, bearing: f64, radius: f64) -> LatLng {
    let delta = distance / radius;
    let theta = bearing.to_radians();
    let phi1 = origin.lat.to_radians();
    let lambda1 = origin.lng.to_radians();

    let d_phi = delta * theta.cos();
    let mut phi2 = phi1 + d_phi;
    if phi2.abs() > FRAC_PI_2 {
        phi2 = if phi2 > 0.0 { PI - phi2 } else { -PI - phi2 };
    }

    let d_psi = ((phi2 / 2.0 + FRAC_PI_4).tan() / (phi1 / 2.0 + FRAC_PI_4).tan()).ln();
    // E-W course: d_phi / d_psi is 0/0.
    let q = if d_psi.abs() > RHUMB_EW_EPS {
        d_phi / d_psi
    } else {
        phi1.cos()
    };

    let lambda2 = lambda1 + delta * theta.sin() / q;

    LatLng::new(phi2.to_degrees(), normalize_longitude(lambda2.to_degrees()))
}
