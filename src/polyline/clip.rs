//! Cohen-Sutherland clipping of segments against a rectangular viewport.

use crate::math::{Bounds, Point2};

/// 4-bit region code of a point relative to a clip rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutCode(u8);

impl OutCode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    /// Classifies `p` against `bounds`. Points on an edge count as inside.
    #[must_use]
    pub fn of(p: &Point2, bounds: &Bounds) -> Self {
        let mut code = 0;
        if p.x < bounds.min.x {
            code |= Self::LEFT.0;
        } else if p.x > bounds.max.x {
            code |= Self::RIGHT.0;
        }
        if p.y < bounds.min.y {
            code |= Self::BOTTOM.0;
        } else if p.y > bounds.max.y {
            code |= Self::TOP.0;
        }
        Self(code)
    }

    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Returns whether the two codes share at least one outside flag.
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

/// Segment clipper that remembers the region code of the last end point.
///
/// When consecutive segments share an end point (`b` of one call is `a` of
/// the next), `reuse_last_code` skips reclassifying it. Passing `true` for a
/// segment that does not start where the previous one ended silently uses a
/// stale code.
#[derive(Debug, Clone)]
pub struct SegmentClipper {
    bounds: Bounds,
    last_code: OutCode,
}

impl SegmentClipper {
    /// Creates a clipper for `bounds`.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            last_code: OutCode::INSIDE,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Region code of the `b` point from the previous call.
    #[must_use]
    pub fn last_code(&self) -> OutCode {
        self.last_code
    }

    /// Clips `a`→`b`, returning the visible part or `None` if nothing is visible.
    ///
    /// With `round`, endpoints moved onto an edge are rounded half-up to whole pixels.
    pub fn clip(
        &mut self,
        a: Point2,
        b: Point2,
        reuse_last_code: bool,
        round: bool,
    ) -> Option<(Point2, Point2)> {
        let code_a = if reuse_last_code {
            self.last_code
        } else {
            OutCode::of(&a, &self.bounds)
        };
        let code_b = OutCode::of(&b, &self.bounds);
        self.last_code = code_b;
        clip_with_codes(a, b, code_a, code_b, &self.bounds, round)
    }
}

/// Clips `a`→`b` against `bounds` without any cached state.
#[must_use]
pub fn clip_segment(a: Point2, b: Point2, bounds: &Bounds, round: bool) -> Option<(Point2, Point2)> {
    clip_with_codes(
        a,
        b,
        OutCode::of(&a, bounds),
        OutCode::of(&b, bounds),
        bounds,
        round,
    )
}

/// Clips a whole polyline, splitting it into the runs visible inside `bounds`.
#[must_use]
pub fn clip_polyline(points: &[Point2], bounds: &Bounds, round: bool) -> Vec<Vec<Point2>> {
    let mut parts: Vec<Vec<Point2>> = Vec::new();
    let mut current: Vec<Point2> = Vec::new();
    let mut clipper = SegmentClipper::new(*bounds);

    for (i, w) in points.windows(2).enumerate() {
        let Some((a, b)) = clipper.clip(w[0], w[1], i > 0, round) else {
            tracing::trace!(segment = i, "segment rejected");
            continue;
        };

        if current.is_empty() {
            current.push(a);
        } else if current.last() != Some(&a) {
            // Re-entered the viewport: start a new run.
            parts.push(std::mem::take(&mut current));
            current.push(a);
        }
        current.push(b);

        // Left the viewport: the run ends here.
        if !clipper.last_code().is_inside() {
            parts.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }

    tracing::debug!(input = points.len(), parts = parts.len(), "clipped polyline");
    parts
}

/// Clips on exact intersections; `round` applies only to endpoints that
/// were moved onto an edge, after the loop has settled.
fn clip_with_codes(
    mut a: Point2,
    mut b: Point2,
    mut code_a: OutCode,
    mut code_b: OutCode,
    bounds: &Bounds,
    round: bool,
) -> Option<(Point2, Point2)> {
    let (mut moved_a, mut moved_b) = (false, false);
    loop {
        if code_a.is_inside() && code_b.is_inside() {
            break;
        }
        if code_a.intersects(code_b) {
            return None;
        }

        let code_out = if code_a.is_inside() { code_b } else { code_a };
        let p = edge_intersection(&a, &b, code_out, bounds);
        let new_code = OutCode::of(&p, bounds);

        if code_out == code_a {
            a = p;
            code_a = new_code;
            moved_a = true;
        } else {
            b = p;
            code_b = new_code;
            moved_b = true;
        }
    }

    if round {
        if moved_a {
            a = round_point(&a);
        }
        if moved_b {
            b = round_point(&b);
        }
    }
    Some((a, b))
}

/// Intersects `a`→`b` with the first boundary edge named in `code`.
fn edge_intersection(a: &Point2, b: &Point2, code: OutCode, bounds: &Bounds) -> Point2 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let (min, max) = (&bounds.min, &bounds.max);

    if code.intersects(OutCode::TOP) {
        Point2::new(a.x + dx * (max.y - a.y) / dy, max.y)
    } else if code.intersects(OutCode::BOTTOM) {
        Point2::new(a.x + dx * (min.y - a.y) / dy, min.y)
    } else if code.intersects(OutCode::RIGHT) {
        Point2::new(max.x, a.y + dy * (max.x - a.x) / dx)
    } else {
        Point2::new(min.x, a.y + dy * (min.x - a.x) / dx)
    }
}

/// Rounds half-up to whole pixels.
fn round_point(p: &Point2) -> Point2 {
    Point2::new((p.x + 0.5).floor(), (p.y + 0.5).floor())
}
