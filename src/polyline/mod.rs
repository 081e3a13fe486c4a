//! Pixel-space polyline utilities: simplification, clipping and
//! coordinate-structure inspection.

mod clip;
mod simplify;

pub use clip::{clip_polyline, clip_segment, OutCode, SegmentClipper};
pub use simplify::{douglas_peucker, reduce_points, simplify};

pub use crate::math::distance_2d::{closest_point_on_segment, point_to_segment_distance};

use crate::geodesy::LatLng;

/// A node of a possibly nested coordinate structure.
///
/// A flat path is a sequence of coordinates. A nested one, such as a
/// multi-line or a polygon with holes, is a sequence of sub-sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateNode {
    /// A bare number, as in the `[lat, lng]` pair form.
    Value(f64),
    /// A coordinate pair.
    Point(LatLng),
    /// A nested sequence.
    List(Vec<CoordinateNode>),
}

/// Returns `true` when `nodes` is a flat coordinate sequence.
///
/// Only the head is inspected. The sequence is flat when its first element
/// is not a list (a coordinate or bare number), or is a list that starts with
/// a bare number such as `[lat, lng]`. Empty input counts as flat.
#[must_use]
pub fn is_flat(nodes: &[CoordinateNode]) -> bool {
    match nodes.first() {
        Some(CoordinateNode::List(inner)) => matches!(inner.first(), Some(CoordinateNode::Value(_))),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(lat: f64, lng: f64) -> CoordinateNode {
        CoordinateNode::List(vec![CoordinateNode::Value(lat), CoordinateNode::Value(lng)])
    }

    #[test]
    fn empty_is_flat() {
        assert!(is_flat(&[]));
    }

    #[test]
    fn coordinates_are_flat() {
        let points = [
            CoordinateNode::Point(LatLng::new(1.0, 2.0)),
            CoordinateNode::Point(LatLng::new(3.0, 4.0)),
        ];
        assert!(is_flat(&points));
        assert!(is_flat(&[pair(51.5, -0.1), pair(51.6, -0.2)]));
    }

    #[test]
    fn rings_are_nested() {
        let ring = CoordinateNode::List(vec![pair(0.0, 0.0), pair(1.0, 0.0), pair(1.0, 1.0)]);
        assert!(!is_flat(&[ring]));
        let ring_of_points = CoordinateNode::List(vec![CoordinateNode::Point(LatLng::new(0.0, 0.0))]);
        assert!(!is_flat(&[ring_of_points]));
    }

    #[test]
    fn empty_first_ring_is_not_flat() {
        assert!(!is_flat(&[CoordinateNode::List(vec![]), pair(1.0, 2.0)]));
    }
}
