use crate::error::{GeometryError, Result};
use crate::geometry::{HitTest, Outline};
use crate::math::angle::{angle_in_range, angle_strictly_inside, normalize_degrees};
use crate::math::{Bounds, Point2, Vector2, TOLERANCE};

use super::{ring_vertices, MIN_NUMBER_OF_POINTS};

/// Angles at which a circle reaches its axis-aligned extremes.
const CARDINAL_ANGLES: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// A ring segment in screen space.
///
/// Angles are degrees from east, growing toward +y (clockwise on a y-down
/// screen). They are stored as given, so `start_angle > end_angle` denotes a
/// wedge that crosses the zero direction.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSector {
    center: Point2,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
    number_of_points: usize,
    click_tolerance: f64,
}

impl PixelSector {
    /// Creates a pixel sector. Negative radii are mirrored.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] for any non-finite input.
    pub fn new(
        center: Point2,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        let mut sector = Self {
            center: Point2::origin(),
            inner_radius: 0.0,
            outer_radius: 0.0,
            start_angle: 0.0,
            end_angle: 360.0,
            number_of_points: 32,
            click_tolerance: 0.0,
        };
        sector
            .set_center(center)?
            .set_radius(inner_radius, outer_radius)?
            .set_angle(start_angle, end_angle)?;
        Ok(sector)
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
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
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    #[must_use]
    pub fn click_tolerance(&self) -> f64 {
        self.click_tolerance
    }

    /// # Errors
    ///
    /// Returns an error if either coordinate is not finite.
    pub fn set_center(&mut self, center: Point2) -> Result<&mut Self> {
        GeometryError::check_finite("center.x", center.x)?;
        GeometryError::check_finite("center.y", center.y)?;
        self.center = center;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns an error if either radius is not finite.
    pub fn set_radius(&mut self, inner: f64, outer: f64) -> Result<&mut Self> {
        let inner = GeometryError::check_finite("inner_radius", inner)?;
        let outer = GeometryError::check_finite("outer_radius", outer)?;
        self.inner_radius = inner.abs();
        self.outer_radius = outer.abs();
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns an error if either angle is not finite.
    pub fn set_angle(&mut self, start: f64, end: f64) -> Result<&mut Self> {
        self.start_angle = GeometryError::check_finite("start_angle", start)?;
        self.end_angle = GeometryError::check_finite("end_angle", end)?;
        Ok(self)
    }

    pub fn set_number_of_points(&mut self, number_of_points: usize) -> &mut Self {
        self.number_of_points = number_of_points.max(MIN_NUMBER_OF_POINTS);
        self
    }

    /// Extra hit margin in pixels around the shape.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite.
    pub fn set_click_tolerance(&mut self, tolerance: f64) -> Result<&mut Self> {
        self.click_tolerance = GeometryError::check_finite("click_tolerance", tolerance)?.abs();
        Ok(self)
    }

    /// Angular extent in `[0, 360]`; zero only when start and end coincide.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        if self.end_angle - self.start_angle >= 360.0 {
            360.0
        } else {
            normalize_degrees(self.end_angle - self.start_angle)
        }
    }

    /// True when the wedge has no angular or radial extent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sweep() <= 0.0 || (self.outer_radius - self.inner_radius).abs() <= TOLERANCE
    }

    /// Closed outline in pixel space.
    #[must_use]
    pub fn outline_points(&self) -> Vec<Point2> {
        ring_vertices(
            self.start_angle,
            self.sweep(),
            self.inner_radius,
            self.outer_radius,
            self.number_of_points,
            |r, angle| self.point_at(r, angle),
        )
    }

    /// Tight axis-aligned extent, grown by the click tolerance.
    ///
    /// Candidates are the center (for a zero inner radius), the four
    /// radius/angle corners, and the outer-radius point of every cardinal
    /// direction strictly inside the sweep.
    #[must_use]
    pub fn bounding_box(&self) -> Bounds {
        let min_r = self.inner_radius.min(self.outer_radius);
        let max_r = self.inner_radius.max(self.outer_radius);
        let end = self.start_angle + self.sweep();

        let mut bounds = Bounds {
            min: self.point_at(min_r, self.start_angle),
            max: self.point_at(min_r, self.start_angle),
        };
        if min_r <= 0.0 {
            bounds.extend(&self.center);
        }
        bounds.extend(&self.point_at(min_r, end));
        bounds.extend(&self.point_at(max_r, self.start_angle));
        bounds.extend(&self.point_at(max_r, end));

        for angle in CARDINAL_ANGLES {
            if angle_strictly_inside(angle, self.start_angle, end) {
                bounds.extend(&self.point_at(max_r, angle));
            }
        }
        bounds.padded(self.click_tolerance)
    }

    /// Hit test for a pixel. An empty wedge never reports a hit.
    ///
    /// The angle of `p` is the arccosine of its direction against the +x
    /// axis, mirrored to `360 - angle` when `p` lies on the negative-y side
    /// of the center.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        if self.is_empty() {
            return false;
        }
        let min_r = self.inner_radius.min(self.outer_radius) - self.click_tolerance;
        let max_r = self.inner_radius.max(self.outer_radius) + self.click_tolerance;

        let v = *p - self.center;
        let distance = v.norm();
        if distance < min_r || distance > max_r {
            return false;
        }
        if distance <= TOLERANCE {
            return min_r <= TOLERANCE;
        }

        let reference = Vector2::x();
        let cos = (reference.dot(&v) / distance).clamp(-1.0, 1.0);
        let mut angle = cos.acos().to_degrees();
        if v.y < 0.0 {
            angle = 360.0 - angle;
        }
        angle_in_range(angle, self.start_angle, self.end_angle)
    }

    fn point_at(&self, radius: f64, angle: f64) -> Point2 {
        let rad = angle.to_radians();
        self.center + Vector2::new(radius * rad.cos(), radius * rad.sin())
    }
}

impl Outline for PixelSector {
    type Vertex = Point2;

    fn outline(&self) -> Vec<Point2> {
        self.outline_points()
    }
}

impl HitTest for PixelSector {
    fn pixel_bounds(&self) -> Bounds {
        self.bounding_box()
    }

    fn contains_point(&self, p: &Point2) -> bool {
        PixelSector::contains_point(self, p)
    }
}
