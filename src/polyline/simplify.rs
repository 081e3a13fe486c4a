//! Polyline simplification for rendering.
//!
//! Two passes over pixel-space points:
//!
//! 1. **Vertex reduction**: drop points closer than the tolerance to the
//!    last kept point.
//! 2. **Douglas-Peucker**: keep only points whose perpendicular deviation
//!    from the current chord exceeds the tolerance.
//!
//! The first and last input points always survive.

use crate::math::distance_2d::{sq_dist, sq_point_to_segment_distance};
use crate::math::Point2;

/// Simplifies `points` with vertex reduction followed by Douglas-Peucker.
///
/// A zero or NaN `tolerance`, or empty input, returns an unchanged copy.
#[must_use]
pub fn simplify(points: &[Point2], tolerance: f64) -> Vec<Point2> {
    if tolerance == 0.0 || tolerance.is_nan() || points.is_empty() {
        return points.to_vec();
    }

    let sq_tolerance = tolerance * tolerance;
    let reduced = reduce_points(points, sq_tolerance);
    let simplified = douglas_peucker(&reduced, sq_tolerance);

    tracing::debug!(
        input = points.len(),
        reduced = reduced.len(),
        output = simplified.len(),
        tolerance,
        "simplified polyline"
    );
    simplified
}

/// Drops points within `sq_tolerance` (squared) of the previously kept point.
///
/// The final point is always kept, even when it is close to its predecessor.
#[must_use]
pub fn reduce_points(points: &[Point2], sq_tolerance: f64) -> Vec<Point2> {
    let Some((first, _)) = points.split_first() else {
        return Vec::new();
    };

    let mut reduced = vec![*first];
    let mut prev = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        if sq_dist(p, &points[prev]) > sq_tolerance {
            reduced.push(*p);
            prev = i;
        }
    }
    if prev < points.len() - 1 {
        reduced.push(points[points.len() - 1]);
    }
    reduced
}

/// Douglas-Peucker simplification with a squared tolerance.
///
/// Runs on an explicit work stack of `(first, last)` index ranges so that
/// deep splits on long inputs cannot overflow the call stack.
#[must_use]
pub fn douglas_peucker(points: &[Point2], sq_tolerance: f64) -> Vec<Point2> {
    let len = points.len();
    if len <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; len];
    keep[0] = true;
    keep[len - 1] = true;

    let mut stack = vec![(0, len - 1)];
    while let Some((first, last)) = stack.pop() {
        if first + 1 >= last {
            continue;
        }

        let mut max_sq_dist = 0.0;
        let mut index = first;
        for i in (first + 1)..last {
            let d = sq_point_to_segment_distance(&points[i], &points[first], &points[last]);
            if d > max_sq_dist {
                index = i;
                max_sq_dist = d;
            }
        }

        if max_sq_dist > sq_tolerance {
            keep[index] = true;
            stack.push((first, index));
            stack.push((index, last));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}
