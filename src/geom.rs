//! Shared geometry utilities.

use kurbo::{CubicBez, Point, Vec2};

/// Chords shorter than this are treated as zero-length.
pub const DEGENERATE_EPSILON: f64 = 1e-9;

/// Distance from point P to the line through A→B.
///
/// Falls back to the distance from A when A and B coincide.
pub fn point_to_line_dist(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let ap = p - a;
    let len = ab.hypot();
    if len < DEGENERATE_EPSILON {
        return ap.hypot();
    }
    ab.cross(ap).abs() / len
}

/// Whether the curve's start and end coincide.
pub fn has_degenerate_chord(curve: &CubicBez) -> bool {
    is_zero_length(curve.p3 - curve.p0)
}

pub fn is_zero_length(v: Vec2) -> bool {
    v.hypot() < DEGENERATE_EPSILON
}

/// De Casteljau split at `t`, returning the [0, t] and [t, 1] halves.
///
/// The shared point is computed once, so `left.p3 == right.p0` exactly.
pub fn split_at(curve: &CubicBez, t: f64) -> (CubicBez, CubicBez) {
    let p01 = curve.p0.lerp(curve.p1, t);
    let p12 = curve.p1.lerp(curve.p2, t);
    let p23 = curve.p2.lerp(curve.p3, t);
    let p012 = p01.lerp(p12, t);
    let p123 = p12.lerp(p23, t);
    let mid = p012.lerp(p123, t);
    (
        CubicBez::new(curve.p0, p01, p012, mid),
        CubicBez::new(mid, p123, p23, curve.p3),
    )
}

pub fn points_finite(points: &[Point]) -> bool {
    points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}
