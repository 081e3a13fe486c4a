//! Degree-based angle helpers shared by the sector shapes.
//!
//! All functions work in degrees. Ranges are closed-open unless stated.

/// Slack applied to inclusive angular range checks, in degrees.
const ANGLE_EPS: f64 = 1e-9;

/// Wraps an angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Maps an angular difference onto a sweep in `(0, 360]`.
///
/// A difference that is a whole number of turns is a full circle, never zero.
#[must_use]
pub fn positive_sweep(delta: f64) -> f64 {
    let sweep = normalize_degrees(delta);
    if sweep == 0.0 {
        360.0
    } else {
        sweep
    }
}

/// Returns whether `angle` lies in the closed range from `start` to `end`.
///
/// `start` and `end` may be given unwrapped. When `start` wraps past `end`
/// (e.g. 350 to 10) the range crosses zero. The angle is measured as a
/// clockwise offset from `start`, so the slack holds on both sides of 0°.
#[must_use]
pub fn angle_in_range(angle: f64, start: f64, end: f64) -> bool {
    if end - start >= 360.0 {
        return true;
    }
    let span = normalize_degrees(end - start);
    let offset = normalize_degrees(angle - start);
    offset <= span + ANGLE_EPS || offset >= 360.0 - ANGLE_EPS
}

/// Returns whether `angle` lies strictly between `start` and `end`.
///
/// Same wrap rules as [`angle_in_range`], without the endpoints.
#[must_use]
pub fn angle_strictly_inside(angle: f64, start: f64, end: f64) -> bool {
    let a = normalize_degrees(angle);
    let s = normalize_degrees(start);
    if end - start >= 360.0 {
        return a != s;
    }
    let e = normalize_degrees(end);
    if s < e {
        a > s && a < e
    } else if s > e {
        a > s || a < e
    } else {
        false
    }
}
