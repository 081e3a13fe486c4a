use super::{LatLng, EARTH_RADIUS, MEAN_EARTH_RADIUS};
use crate::math::angle::normalize_degrees;

/// Central angle in radians between two points (haversine formula).
#[must_use]
pub fn central_angle(a: LatLng, b: LatLng) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle distance in metres between two points on the mean-radius sphere.
#[must_use]
pub fn haversine_distance(a: LatLng, b: LatLng) -> f64 {
    MEAN_EARTH_RADIUS * central_angle(a, b)
}

/// Forward azimuth from `from` to `to`, in degrees `[0, 360)` clockwise from north.
#[must_use]
pub fn initial_bearing(from: LatLng, to: LatLng) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let dlng = (to.lng - from.lng).to_radians();
    let y = dlng.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlng.cos();
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Total haversine length of a path through `points`.
#[must_use]
pub fn path_length(points: &[LatLng]) -> f64 {
    points
        .windows(2)
        .map(|w| haversine_distance(w[0], w[1]))
        .sum()
}

/// Area of a closed ring on the sphere, in square metres.
///
/// The ring is closed implicitly; fewer than three points have no area.
#[must_use]
pub fn geodesic_area(ring: &[LatLng]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let p1 = ring[i];
        let p2 = ring[(i + 1) % n];
        area += (p2.lng - p1.lng).to_radians()
            * (2.0 + p1.lat.to_radians().sin() + p2.lat.to_radians().sin());
    }
    (area * EARTH_RADIUS * EARTH_RADIUS / 2.0).abs()
}

/// Samples `count` points along the great circle from `from` to `to`, both included.
///
/// Longitudes are unwrapped so consecutive points never differ by more than
/// 180 degrees, which keeps the arc continuous across the antimeridian.
/// Coincident endpoints yield a single point.
#[must_use]
pub fn great_circle_arc(from: LatLng, to: LatLng, count: usize) -> Vec<LatLng> {
    let phi1 = from.lat.to_radians();
    let lambda1 = from.lng.to_radians();
    let phi2 = to.lat.to_radians();
    let lambda2 = to.lng.to_radians();

    let d = 2.0
        * (((phi1 - phi2) / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * ((lambda1 - lambda2) / 2.0).sin().powi(2))
        .sqrt()
        .asin();
    if d == 0.0 {
        return vec![from];
    }

    let count = count.max(2);
    #[allow(clippy::cast_precision_loss)]
    let step = 1.0 / (count - 1) as f64;
    let mut arc: Vec<LatLng> = Vec::with_capacity(count);
    for i in 0..count {
        #[allow(clippy::cast_precision_loss)]
        let f = step * i as f64;
        let a = ((1.0 - f) * d).sin() / d.sin();
        let b = (f * d).sin() / d.sin();
        let x = a * phi1.cos() * lambda1.cos() + b * phi2.cos() * lambda2.cos();
        let y = a * phi1.cos() * lambda1.sin() + b * phi2.cos() * lambda2.sin();
        let z = a * phi1.sin() + b * phi2.sin();

        let lat = z.atan2(x.hypot(y)).to_degrees();
        let mut lng = y.atan2(x).to_degrees();
        let previous = arc.last().map_or(from.lng, |p| p.lng);
        while lng - previous > 180.0 {
            lng -= 360.0;
        }
        while lng - previous < -180.0 {
            lng += 360.0;
        }
        arc.push(LatLng::new(lat, lng));
    }
    arc
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn haversine_one_degree_of_equator() {
        let d = haversine_distance(LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0));
        assert_relative_eq!(d, MEAN_EARTH_RADIUS * 1f64.to_radians(), max_relative = 1e-12);
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = LatLng::new(51.5, -0.12);
        let b = LatLng::new(48.85, 2.35);
        assert_relative_eq!(haversine_distance(a, b), haversine_distance(b, a), max_relative = 1e-12);
        // London to Paris is roughly 343 km.
        let d = haversine_distance(a, b);
        assert!((330_000.0..355_000.0).contains(&d), "d={d}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let o = LatLng::new(0.0, 0.0);
        assert_abs_diff_eq!(initial_bearing(o, LatLng::new(1.0, 0.0)), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(o, LatLng::new(0.0, 1.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(o, LatLng::new(-1.0, 0.0)), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(o, LatLng::new(0.0, -1.0)), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn path_length_sums_segments() {
        let pts = [
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(0.0, 3.0),
        ];
        let expected = MEAN_EARTH_RADIUS * 3f64.to_radians();
        assert_relative_eq!(path_length(&pts), expected, max_relative = 1e-12);
        assert_abs_diff_eq!(path_length(&pts[..1]), 0.0);
    }

    #[test]
    fn area_of_small_square_near_equator() {
        // 0.01 x 0.01 degree box: side ~1113 m.
        let ring = [
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 0.01),
            LatLng::new(0.01, 0.01),
            LatLng::new(0.01, 0.0),
        ];
        let side = EARTH_RADIUS * 0.01f64.to_radians();
        assert_relative_eq!(geodesic_area(&ring), side * side, max_relative = 1e-3);
    }

    #[test]
    fn area_ignores_winding_and_degenerate_rings() {
        let ring = [
            LatLng::new(0.0, 0.0),
            LatLng::new(1.0, 0.0),
            LatLng::new(1.0, 1.0),
        ];
        let reversed: Vec<_> = ring.iter().rev().copied().collect();
        assert_relative_eq!(geodesic_area(&ring), geodesic_area(&reversed), max_relative = 1e-12);
        assert_abs_diff_eq!(geodesic_area(&ring[..2]), 0.0);
    }

    #[test]
    fn arc_endpoints_and_count() {
        let from = LatLng::new(10.0, 20.0);
        let to = LatLng::new(40.0, 60.0);
        let arc = great_circle_arc(from, to, 100);
        assert_eq!(arc.len(), 100);
        assert_abs_diff_eq!(arc[0].lat, from.lat, epsilon = 1e-9);
        assert_abs_diff_eq!(arc[0].lng, from.lng, epsilon = 1e-9);
        assert_abs_diff_eq!(arc[99].lat, to.lat, epsilon = 1e-9);
        assert_abs_diff_eq!(arc[99].lng, to.lng, epsilon = 1e-9);
    }

    #[test]
    fn arc_stays_continuous_across_antimeridian() {
        let arc = great_circle_arc(LatLng::new(0.0, 170.0), LatLng::new(0.0, -170.0), 11);
        for w in arc.windows(2) {
            assert!((w[1].lng - w[0].lng).abs() < 180.0, "{w:?}");
        }
        assert_abs_diff_eq!(arc[10].lng, 190.0, epsilon = 1e-9);
    }

    #[test]
    fn arc_of_identical_points() {
        let p = LatLng::new(5.0, 5.0);
        assert_eq!(great_circle_arc(p, p, 50), vec![p]);
    }
}
