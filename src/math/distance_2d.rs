use super::Point2;

/// Squared distance between two points.
#[must_use]
pub fn sq_dist(a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Returns the point of segment `a`→`b` closest to `p`.
///
/// The projection parameter `t` is clamped to the segment: `t > 1` snaps to
/// `b`, `t <= 0` snaps to `a`. A zero-length segment always yields `a`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dot = dx * dx + dy * dy;

    if dot > 0.0 {
        let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / dot;
        if t > 1.0 {
            return *b;
        } else if t > 0.0 {
            return Point2::new(a.x + dx * t, a.y + dy * t);
        }
    }
    *a
}

/// Squared distance from `p` to segment `a`→`b`.
#[must_use]
pub fn sq_point_to_segment_distance(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    sq_dist(p, &closest_point_on_segment(p, a, b))
}

/// Returns the minimum distance from `p` to the segment `a`→`b`.
#[must_use]
pub fn point_to_segment_distance(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    sq_point_to_segment_distance(p, a, b).sqrt()
}
