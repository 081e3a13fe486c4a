//! Annular wedges ("sectors") on the sphere and in pixel space.
//!
//! A [`Sector`] is described by a geographic center, an inner/outer radius in
//! metres and a start/end bearing in degrees clockwise from north. Its
//! bearings are always kept in the canonical form `start ∈ [0, 360)`,
//! `end = start + sweep` with `sweep ∈ (0, 360]`.
//!
//! [`PixelSector`] is the projected counterpart used for bounds and
//! hit-testing on a rendering surface.

mod pixel;

pub use pixel::PixelSector;

use crate::error::{GeometryError, Result};
use crate::geodesy::{central_angle, destination_point, initial_bearing, LatLng, EARTH_RADIUS};
use crate::math::angle::{angle_in_range, normalize_degrees, positive_sweep};
use crate::math::{Point2, TOLERANCE};

use super::Outline;

/// Smallest tessellation density accepted by [`Sector::set_number_of_points`].
pub const MIN_NUMBER_OF_POINTS: usize = 10;

/// Distance of the rotate handle, as a multiple of the outer radius.
const ROTATE_HANDLE_FACTOR: f64 = 1.3;

/// Construction parameters for a [`Sector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorOptions {
    pub center: LatLng,
    /// Inner radius in metres.
    pub inner_radius: f64,
    /// Outer radius in metres.
    pub outer_radius: f64,
    /// Start bearing in degrees clockwise from north.
    pub start_bearing: f64,
    /// End bearing in degrees clockwise from north.
    pub end_bearing: f64,
    /// Outline points per full turn.
    pub number_of_points: usize,
    /// Use rhumb lines instead of great circles for radial offsets.
    pub rhumb: bool,
}

impl Default for SectorOptions {
    fn default() -> Self {
        Self {
            center: LatLng::new(0.0, 0.0),
            inner_radius: 100.0,
            outer_radius: 200.0,
            start_bearing: 0.0,
            end_bearing: 90.0,
            number_of_points: 32,
            rhumb: false,
        }
    }
}

/// Positions of the interactive editing handles of a sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorHandles {
    /// Move handle.
    pub center: LatLng,
    /// Inner radius handle, on the mid bearing.
    pub inner_radius: LatLng,
    /// Outer radius handle, on the mid bearing.
    pub outer_radius: LatLng,
    /// Start bearing handle, at mid radius.
    pub start: LatLng,
    /// End bearing handle, at mid radius.
    pub end: LatLng,
    /// Rotate handle, beyond the outer arc on the mid bearing.
    pub rotate: LatLng,
}

/// A ring segment on the sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    center: LatLng,
    inner_radius: f64,
    outer_radius: f64,
    start_bearing: f64,
    sweep: f64,
    number_of_points: usize,
    rhumb: bool,
}

impl Default for Sector {
    fn default() -> Self {
        let o = SectorOptions::default();
        Self {
            center: o.center,
            inner_radius: o.inner_radius,
            outer_radius: o.outer_radius,
            start_bearing: o.start_bearing,
            sweep: o.end_bearing - o.start_bearing,
            number_of_points: o.number_of_points,
            rhumb: o.rhumb,
        }
    }
}

impl Sector {
    /// Creates a sector, validating and normalizing every option.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] if any coordinate, radius
    /// or bearing is NaN or infinite.
    pub fn new(options: SectorOptions) -> Result<Self> {
        let mut sector = Self {
            start_bearing: 0.0,
            sweep: 360.0,
            ..Self::default()
        };
        sector
            .set_center(options.center)?
            .set_inner_radius(options.inner_radius)?
            .set_outer_radius(options.outer_radius)?
            .set_start_bearing(options.start_bearing)?
            .set_end_bearing(options.end_bearing)?
            .set_number_of_points(options.number_of_points)
            .set_rhumb(options.rhumb);
        Ok(sector)
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        self.center
    }

    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    #[must_use]
    pub fn start_bearing(&self) -> f64 {
        self.start_bearing
    }

    #[must_use]
    pub fn end_bearing(&self) -> f64 {
        self.start_bearing + self.sweep
    }

    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.number_of_points
    }

    #[must_use]
    pub fn rhumb(&self) -> bool {
        self.rhumb
    }

    /// Moves the sector.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is not finite.
    pub fn set_center(&mut self, center: LatLng) -> Result<&mut Self> {
        GeometryError::check_finite("center.lat", center.lat)?;
        GeometryError::check_finite("center.lng", center.lng)?;
        self.center = center;
        Ok(self)
    }

    /// Sets the inner radius in metres. Negative values are mirrored.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not finite.
    pub fn set_inner_radius(&mut self, radius: f64) -> Result<&mut Self> {
        self.inner_radius = GeometryError::check_finite("inner_radius", radius)?.abs();
        Ok(self)
    }

    /// Sets the outer radius in metres. Negative values are mirrored.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not finite.
    pub fn set_outer_radius(&mut self, radius: f64) -> Result<&mut Self> {
        self.outer_radius = GeometryError::check_finite("outer_radius", radius)?.abs();
        Ok(self)
    }

    /// Sets the start bearing, keeping the end bearing's direction.
    ///
    /// The end bearing is re-expressed so that the sweep stays in `(0, 360]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bearing` is not finite.
    pub fn set_start_bearing(&mut self, bearing: f64) -> Result<&mut Self> {
        let start = normalize_degrees(GeometryError::check_finite("start_bearing", bearing)?);
        self.sweep = positive_sweep(self.end_bearing() - start);
        self.start_bearing = start;
        Ok(self)
    }

    /// Sets the end bearing, keeping the start bearing.
    ///
    /// # Errors
    ///
    /// Returns an error if `bearing` is not finite.
    pub fn set_end_bearing(&mut self, bearing: f64) -> Result<&mut Self> {
        let end = GeometryError::check_finite("end_bearing", bearing)?;
        self.sweep = positive_sweep(end - self.start_bearing);
        Ok(self)
    }

    /// Sets the outline density, clamped to [`MIN_NUMBER_OF_POINTS`].
    pub fn set_number_of_points(&mut self, number_of_points: usize) -> &mut Self {
        self.number_of_points = number_of_points.max(MIN_NUMBER_OF_POINTS);
        self
    }

    pub fn set_rhumb(&mut self, rhumb: bool) -> &mut Self {
        self.rhumb = rhumb;
        self
    }

    /// Angular extent in degrees, always in `(0, 360]`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Bearing halfway through the sweep, in `[0, 360)`.
    #[must_use]
    pub fn mid_bearing(&self) -> f64 {
        normalize_degrees(self.start_bearing + self.sweep() / 2.0)
    }

    /// Turns the wedge so it is centred on `center_bearing`, keeping its sweep.
    ///
    /// # Errors
    ///
    /// Returns an error if `center_bearing` is not finite.
    pub fn rotate(&mut self, center_bearing: f64) -> Result<&mut Self> {
        let bearing = GeometryError::check_finite("center_bearing", center_bearing)?;
        self.start_bearing = normalize_degrees(bearing - self.sweep / 2.0);
        Ok(self)
    }

    /// A sector whose radii coincide covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sweep() <= 0.0 || (self.outer_radius - self.inner_radius).abs() <= TOLERANCE
    }

    /// Offsets `distance` metres from the center along `bearing`, honouring the rhumb flag.
    #[must_use]
    pub fn destination_point(&self, distance: f64, bearing: f64) -> LatLng {
        destination_point(self.center, distance, bearing, EARTH_RADIUS, self.rhumb)
    }

    /// Returns the closed outline: the outer arc from start to end bearing,
    /// then the inner arc back. A zero inner radius collapses the inner arc
    /// to the center point.
    #[must_use]
    pub fn boundary_vertices(&self) -> Vec<LatLng> {
        ring_vertices(
            self.start_bearing,
            self.sweep(),
            self.inner_radius,
            self.outer_radius,
            self.number_of_points,
            |radius, bearing| {
                if radius == 0.0 {
                    self.center
                } else {
                    self.destination_point(radius, bearing)
                }
            },
        )
    }

    /// Geodesic hit test: distance from the center between the two radii
    /// and bearing within the sweep. An empty sector contains nothing.
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        if self.is_empty() {
            return false;
        }
        let (min_r, max_r) = self.radius_range();
        let distance = central_angle(self.center, point) * EARTH_RADIUS;
        if distance < min_r || distance > max_r {
            return false;
        }
        if distance <= TOLERANCE {
            return min_r <= TOLERANCE;
        }
        angle_in_range(
            initial_bearing(self.center, point),
            self.start_bearing,
            self.end_bearing(),
        )
    }

    /// Editing handle positions for the current shape.
    #[must_use]
    pub fn handles(&self) -> SectorHandles {
        let mid = self.mid_bearing();
        let mid_radius = (self.inner_radius + self.outer_radius) / 2.0;
        SectorHandles {
            center: self.center,
            inner_radius: self.destination_point(self.inner_radius, mid),
            outer_radius: self.destination_point(self.outer_radius, mid),
            start: self.destination_point(mid_radius, self.start_bearing),
            end: self.destination_point(mid_radius, self.end_bearing()),
            rotate: self.destination_point(self.outer_radius * ROTATE_HANDLE_FACTOR, mid),
        }
    }

    /// Sets the inner radius to the distance between the center and `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` has non-finite coordinates.
    pub fn resize_inner_to(&mut self, point: LatLng) -> Result<&mut Self> {
        self.set_inner_radius(central_angle(self.center, point) * EARTH_RADIUS)
    }

    /// Sets the outer radius to the distance between the center and `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` has non-finite coordinates.
    pub fn resize_outer_to(&mut self, point: LatLng) -> Result<&mut Self> {
        self.set_outer_radius(central_angle(self.center, point) * EARTH_RADIUS)
    }

    /// Projects the sector onto a screen whose center pixel is `center_px`.
    ///
    /// Bearings (from north) become screen angles (from east, y down) and
    /// radii are scaled by `pixels_per_meter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is not a positive finite number or the
    /// center pixel is not finite.
    pub fn to_pixel(&self, center_px: Point2, pixels_per_meter: f64) -> Result<PixelSector> {
        let scale = GeometryError::check_finite("pixels_per_meter", pixels_per_meter)?;
        if scale <= 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "pixels_per_meter must be positive, got {scale}"
            ))
            .into());
        }
        let mut pixel = PixelSector::new(
            center_px,
            self.inner_radius * scale,
            self.outer_radius * scale,
            self.start_bearing - 90.0,
            self.end_bearing() - 90.0,
        )?;
        pixel.set_number_of_points(self.number_of_points);
        Ok(pixel)
    }

    fn radius_range(&self) -> (f64, f64) {
        (
            self.inner_radius.min(self.outer_radius),
            self.inner_radius.max(self.outer_radius),
        )
    }
}

impl Outline for Sector {
    type Vertex = LatLng;

    fn outline(&self) -> Vec<LatLng> {
        self.boundary_vertices()
    }
}

/// Screen bearing of `handle_px` seen from `center_px`, clockwise from
/// screen-north (y grows downward), in `[0, 360)`.
#[must_use]
pub fn pixel_bearing(center_px: Point2, handle_px: Point2) -> f64 {
    let v = handle_px - center_px;
    normalize_degrees(v.x.atan2(-v.y).to_degrees())
}

/// Walks the outer arc forward then the inner arc backward.
///
/// The outer arc takes `ceil(sweep * n / 360)` evenly spaced samples plus the
/// exact end angle; the inner arc mirrors it, or is the single point
/// `point_at(0.0, start)` when `inner` is zero.
pub(crate) fn ring_vertices<P>(
    start: f64,
    sweep: f64,
    inner: f64,
    outer: f64,
    number_of_points: usize,
    point_at: impl Fn(f64, f64) -> P,
) -> Vec<P> {
    let end = start + sweep;
    #[allow(clippy::cast_precision_loss)]
    let point_count = sweep * number_of_points as f64 / 360.0;
    if point_count <= 0.0 {
        return Vec::new();
    }
    let delta = sweep / point_count;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = point_count.ceil() as usize;

    let mut vertices = Vec::with_capacity(2 * steps + 2);
    for i in 0..steps {
        #[allow(clippy::cast_precision_loss)]
        vertices.push(point_at(outer, start + delta * i as f64));
    }
    vertices.push(point_at(outer, end));

    if inner == 0.0 {
        vertices.push(point_at(0.0, start));
    } else {
        for i in 0..steps {
            #[allow(clippy::cast_precision_loss)]
            vertices.push(point_at(inner, end - delta * i as f64));
        }
        vertices.push(point_at(inner, start));
    }
    vertices
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MapgeomError;
    use crate::geodesy::{great_circle_destination, rhumb_destination};
    use approx::assert_abs_diff_eq;

    fn quarter(inner: f64, outer: f64) -> Sector {
        Sector::new(SectorOptions {
            center: LatLng::new(0.0, 0.0),
            inner_radius: inner,
            outer_radius: outer,
            start_bearing: 0.0,
            end_bearing: 90.0,
            number_of_points: 32,
            rhumb: false,
        })
        .unwrap()
    }

    fn assert_sweep_invariant(s: &Sector) {
        let sweep = s.sweep();
        assert!(sweep > 0.0 && sweep <= 360.0, "sweep={sweep} for {s:?}");
        assert!((0.0..360.0).contains(&s.start_bearing()), "start={}", s.start_bearing());
    }

    #[test]
    fn defaults_follow_factory_options() {
        let s = Sector::new(SectorOptions::default()).unwrap();
        assert_eq!(s.center(), LatLng::new(0.0, 0.0));
        assert_abs_diff_eq!(s.inner_radius(), 100.0);
        assert_abs_diff_eq!(s.outer_radius(), 200.0);
        assert_abs_diff_eq!(s.start_bearing(), 0.0);
        assert_abs_diff_eq!(s.end_bearing(), 90.0);
        assert_eq!(s.number_of_points(), 32);
        assert!(!s.rhumb());
    }

    #[test]
    fn radii_are_mirrored_and_points_clamped() {
        let mut s = Sector::default();
        s.set_inner_radius(-50.0).unwrap().set_outer_radius(-300.0).unwrap();
        s.set_number_of_points(3);
        assert_abs_diff_eq!(s.inner_radius(), 50.0);
        assert_abs_diff_eq!(s.outer_radius(), 300.0);
        assert_eq!(s.number_of_points(), MIN_NUMBER_OF_POINTS);
    }

    #[test]
    fn nan_parameters_are_rejected() {
        let mut s = Sector::default();
        let err = s.set_start_bearing(f64::NAN).unwrap_err();
        assert!(matches!(
            err,
            MapgeomError::Geometry(GeometryError::InvalidParameter {
                parameter: "start_bearing",
                ..
            })
        ));
        assert!(s.set_end_bearing(f64::NAN).is_err());
        assert!(s.set_inner_radius(f64::NAN).is_err());
        assert!(s.set_outer_radius(f64::INFINITY).is_err());
        assert!(s.set_center(LatLng::new(f64::NAN, 0.0)).is_err());
        // Rejected input leaves the shape untouched.
        assert_eq!(s, Sector::default());
        assert!(Sector::new(SectorOptions {
            outer_radius: f64::NAN,
            ..SectorOptions::default()
        })
        .is_err());
    }

    #[test]
    fn start_bearing_wraps_and_keeps_end_direction() {
        let mut s = quarter(0.0, 1000.0);
        s.set_start_bearing(-30.0).unwrap();
        assert_abs_diff_eq!(s.start_bearing(), 330.0);
        assert_abs_diff_eq!(s.end_bearing(), 450.0);
        assert_abs_diff_eq!(s.sweep(), 120.0);
    }

    #[test]
    fn end_bearing_before_start_wraps_forward() {
        let mut s = quarter(0.0, 1000.0);
        s.set_start_bearing(300.0).unwrap();
        s.set_end_bearing(20.0).unwrap();
        assert_abs_diff_eq!(s.start_bearing(), 300.0);
        assert_abs_diff_eq!(s.end_bearing(), 380.0);
    }

    #[test]
    fn equal_bearings_make_a_full_circle() {
        let mut s = quarter(0.0, 1000.0);
        s.set_end_bearing(0.0).unwrap();
        assert_abs_diff_eq!(s.sweep(), 360.0);
        s.set_end_bearing(720.0).unwrap();
        assert_abs_diff_eq!(s.sweep(), 360.0);
    }

    #[test]
    fn sweep_invariant_holds_for_any_assignment_order() {
        let values = [
            -725.0, -360.0, -90.0, -0.5, 0.0, 0.25, 10.0, 89.9, 90.0, 180.0, 270.0, 359.999,
            360.0, 361.0, 720.0, 1000.0,
        ];
        let mut s = Sector::default();
        for (i, &a) in values.iter().enumerate() {
            for &b in values.iter().rev().skip(i % 3) {
                s.set_start_bearing(a).unwrap();
                assert_sweep_invariant(&s);
                s.set_end_bearing(b).unwrap();
                assert_sweep_invariant(&s);
                s.set_end_bearing(a).unwrap();
                assert_sweep_invariant(&s);
                s.set_start_bearing(b).unwrap();
                assert_sweep_invariant(&s);
                s.rotate(a + b).unwrap();
                assert_sweep_invariant(&s);
            }
        }
    }

    #[test]
    fn rotate_keeps_sweep() {
        let mut s = quarter(10.0, 100.0);
        s.rotate(0.0).unwrap();
        assert_abs_diff_eq!(s.start_bearing(), 315.0);
        assert_abs_diff_eq!(s.end_bearing(), 405.0);
        assert_abs_diff_eq!(s.mid_bearing(), 0.0);
    }

    #[test]
    fn quarter_wedge_vertex_count_and_endpoints() {
        let s = quarter(0.0, 1000.0);
        let v = s.boundary_vertices();
        // 8 stepped outer points, the exact end point, then the center.
        assert_eq!(v.len(), 90 * 32 / 360 + 2);
        let north = great_circle_destination(LatLng::new(0.0, 0.0), 1000.0, 0.0, EARTH_RADIUS);
        let east = great_circle_destination(LatLng::new(0.0, 0.0), 1000.0, 90.0, EARTH_RADIUS);
        assert_abs_diff_eq!(v[0].lat, north.lat, epsilon = 1e-12);
        assert_abs_diff_eq!(v[0].lng, north.lng, epsilon = 1e-12);
        assert_abs_diff_eq!(v[8].lat, east.lat, epsilon = 1e-12);
        assert_abs_diff_eq!(v[8].lng, east.lng, epsilon = 1e-12);
        assert_eq!(v[9], LatLng::new(0.0, 0.0));
    }

    #[test]
    fn annulus_walks_inner_arc_backwards() {
        let s = quarter(500.0, 1000.0);
        let v = s.boundary_vertices();
        assert_eq!(v.len(), 18);
        let inner_end = s.destination_point(500.0, 90.0);
        let inner_start = s.destination_point(500.0, 0.0);
        assert_abs_diff_eq!(v[9].lng, inner_end.lng, epsilon = 1e-12);
        assert_abs_diff_eq!(v[17].lat, inner_start.lat, epsilon = 1e-12);
        assert_abs_diff_eq!(v[17].lng, inner_start.lng, epsilon = 1e-12);
    }

    #[test]
    fn fractional_point_count_still_reaches_end() {
        let mut s = quarter(0.0, 1000.0);
        s.set_end_bearing(100.0).unwrap();
        let v = s.boundary_vertices();
        // ceil(100 * 32 / 360) = 9 stepped points + end + center.
        assert_eq!(v.len(), 11);
        let end = s.destination_point(1000.0, 100.0);
        assert_abs_diff_eq!(v[9].lat, end.lat, epsilon = 1e-12);
    }

    #[test]
    fn outline_points_lie_on_their_radius() {
        let s = quarter(0.0, 2500.0);
        for p in &s.boundary_vertices()[..9] {
            let d = central_angle(s.center(), *p) * EARTH_RADIUS;
            assert_abs_diff_eq!(d, 2500.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn empty_when_radii_coincide() {
        assert!(quarter(100.0, 100.0).is_empty());
        assert!(!quarter(0.0, 100.0).is_empty());
    }

    #[test]
    fn geodesic_contains() {
        let s = quarter(100.0, 1000.0);
        assert!(s.contains(s.destination_point(500.0, 45.0)));
        assert!(!s.contains(s.destination_point(50.0, 45.0)));
        assert!(!s.contains(s.destination_point(1500.0, 45.0)));
        assert!(!s.contains(s.destination_point(500.0, 180.0)));
        assert!(!s.contains(s.center()));
        assert!(quarter(0.0, 1000.0).contains(LatLng::new(0.0, 0.0)));
    }

    #[test]
    fn empty_sector_contains_nothing() {
        let s = quarter(500.0, 500.0);
        assert!(!s.contains(s.destination_point(500.0, 45.0)));
    }

    #[test]
    fn rhumb_flag_switches_vertex_formula() {
        let center = LatLng::new(60.0, 10.0);
        let s = Sector::new(SectorOptions {
            center,
            inner_radius: 0.0,
            outer_radius: 50_000.0,
            start_bearing: 60.0,
            end_bearing: 150.0,
            number_of_points: 32,
            rhumb: true,
        })
        .unwrap();
        let first = s.boundary_vertices()[0];

        let rhumb = rhumb_destination(center, 50_000.0, 60.0, EARTH_RADIUS);
        assert_abs_diff_eq!(first.lat, rhumb.lat, epsilon = 1e-12);
        assert_abs_diff_eq!(first.lng, rhumb.lng, epsilon = 1e-12);

        let great_circle = great_circle_destination(center, 50_000.0, 60.0, EARTH_RADIUS);
        assert!((first.lat - great_circle.lat).abs() > 1e-4);
    }

    #[test]
    fn geodesic_contains_across_north() {
        let mut s = quarter(0.0, 1000.0);
        s.rotate(0.0).unwrap();
        assert!(s.contains(s.destination_point(500.0, 350.0)));
        assert!(s.contains(s.destination_point(500.0, 10.0)));
        assert!(!s.contains(s.destination_point(500.0, 90.0)));
    }

    #[test]
    fn handles_sit_on_expected_bearings() {
        let s = quarter(100.0, 1000.0);
        let h = s.handles();
        assert_eq!(h.center, s.center());
        assert_eq!(h.outer_radius, s.destination_point(1000.0, 45.0));
        assert_eq!(h.inner_radius, s.destination_point(100.0, 45.0));
        assert_eq!(h.start, s.destination_point(550.0, 0.0));
        assert_eq!(h.end, s.destination_point(550.0, 90.0));
        assert_eq!(h.rotate, s.destination_point(s.outer_radius() * 1.3, 45.0));
    }

    #[test]
    fn resize_to_dragged_handle() {
        let mut s = quarter(100.0, 1000.0);
        let p = s.destination_point(2000.0, 30.0);
        s.resize_outer_to(p).unwrap();
        assert_abs_diff_eq!(s.outer_radius(), 2000.0, epsilon = 1e-6);
        let q = s.destination_point(250.0, 60.0);
        s.resize_inner_to(q).unwrap();
        assert_abs_diff_eq!(s.inner_radius(), 250.0, epsilon = 1e-6);
    }

    #[test]
    fn pixel_bearing_is_clockwise_from_screen_north() {
        let c = Point2::new(100.0, 100.0);
        assert_abs_diff_eq!(pixel_bearing(c, Point2::new(100.0, 50.0)), 0.0);
        assert_abs_diff_eq!(pixel_bearing(c, Point2::new(150.0, 100.0)), 90.0);
        assert_abs_diff_eq!(pixel_bearing(c, Point2::new(100.0, 150.0)), 180.0);
        assert_abs_diff_eq!(pixel_bearing(c, Point2::new(50.0, 100.0)), 270.0);
    }

    #[test]
    fn to_pixel_converts_bearings_and_radii() {
        let s = quarter(100.0, 1000.0);
        let px = s.to_pixel(Point2::new(200.0, 200.0), 0.1).unwrap();
        assert_abs_diff_eq!(px.start_angle(), -90.0);
        assert_abs_diff_eq!(px.end_angle(), 0.0);
        assert_abs_diff_eq!(px.inner_radius(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(px.outer_radius(), 100.0, epsilon = 1e-12);
        // North-east on the map is up-right on screen.
        assert!(px.contains_point(&Point2::new(240.0, 160.0)));
        assert!(!px.contains_point(&Point2::new(240.0, 240.0)));
    }

    #[test]
    fn to_pixel_rejects_bad_scale() {
        let s = quarter(100.0, 1000.0);
        assert!(s.to_pixel(Point2::new(0.0, 0.0), 0.0).is_err());
        assert!(s.to_pixel(Point2::new(0.0, 0.0), f64::NAN).is_err());
    }
}
