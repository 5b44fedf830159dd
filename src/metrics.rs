//! Shape metrics for cubic segments: straightness, curvature, corner angle.
//!
//! All functions are pure and guard degenerate geometry before dividing.

use kurbo::{CubicBez, ParamCurve, ParamCurveDeriv, Point};

use crate::config::RegularizeConfig;
use crate::geom::{is_zero_length, point_to_line_dist, DEGENERATE_EPSILON};

/// Parameters at which curvature is sampled for the low-curvature test.
pub const CURVATURE_SAMPLES: [f64; 3] = [0.25, 0.5, 0.75];

/// Maximum perpendicular deviation of the curve from its chord.
///
/// Samples `sample_count` evenly spaced parameters in [0, 1], endpoints
/// included. A single sample is taken at t = 0.5.
pub fn straightness(curve: &CubicBez, sample_count: usize) -> f64 {
    let ts: Vec<f64> = match sample_count {
        0 => return 0.0,
        1 => vec![0.5],
        n => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    };
    ts.into_iter()
        .map(|t| point_to_line_dist(curve.eval(t), curve.p0, curve.p3))
        .fold(0.0, f64::max)
}

/// Curvature magnitude |v × a| / |v|³ at parameter `t`.
///
/// Returns 0.0 where the velocity vanishes (cusps, collapsed handles).
pub fn curvature(curve: &CubicBez, t: f64) -> f64 {
    let d1 = curve.deriv();
    let v = d1.eval(t).to_vec2();
    let a = d1.deriv().eval(t).to_vec2();
    let speed = v.hypot();
    if speed < DEGENERATE_EPSILON {
        return 0.0;
    }
    v.cross(a).abs() / speed.powi(3)
}

/// Largest curvature over [`CURVATURE_SAMPLES`].
pub fn max_curvature(curve: &CubicBez) -> f64 {
    CURVATURE_SAMPLES
        .iter()
        .map(|&t| curvature(curve, t))
        .fold(0.0, f64::max)
}

/// Angle at `p2` between `p1 - p2` and `p3 - p2`, in degrees [0, 180].
///
/// `None` when either arm has zero length.
pub fn corner_angle(p1: Point, p2: Point, p3: Point) -> Option<f64> {
    let a = p1 - p2;
    let b = p3 - p2;
    if is_zero_length(a) || is_zero_length(b) {
        return None;
    }
    let cos = (a.dot(b) / (a.hypot() * b.hypot())).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Best right-angle candidate among a curve's two control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerCandidate {
    /// The control point that would become the corner vertex.
    pub corner: Point,
    /// Angle at that control point, in degrees.
    pub angle: f64,
}

impl CornerCandidate {
    pub fn deviation_from_right(&self) -> f64 {
        (self.angle - 90.0).abs()
    }
}

/// Pick whichever control point forms the angle closest to 90°
/// with the curve's endpoints. Ties go to the first control point.
pub fn right_angle_score(curve: &CubicBez) -> Option<CornerCandidate> {
    let candidate = |corner: Point| {
        corner_angle(curve.p0, corner, curve.p3).map(|angle| CornerCandidate { corner, angle })
    };
    match (candidate(curve.p1), candidate(curve.p2)) {
        (Some(a), Some(b)) => {
            if b.deviation_from_right() < a.deviation_from_right() {
                Some(b)
            } else {
                Some(a)
            }
        }
        (a, b) => a.or(b),
    }
}

/// The corner point if the curve is really two legs meeting at ~90°.
///
/// Besides the angle test, the curve must stay within
/// `corner_straightness_threshold × chord length` of its chord.
pub fn right_angle_corner(curve: &CubicBez, config: &RegularizeConfig) -> Option<Point> {
    let candidate = right_angle_score(curve)?;
    if candidate.deviation_from_right() >= config.angle_threshold {
        return None;
    }
    let chord = (curve.p3 - curve.p0).hypot();
    if chord < DEGENERATE_EPSILON {
        return None;
    }
    let deviation = straightness(curve, config.straightness_samples) / chord;
    (deviation < config.corner_straightness_threshold).then_some(candidate.corner)
}

pub fn is_mostly_straight(curve: &CubicBez, config: &RegularizeConfig) -> bool {
    straightness(curve, config.straightness_samples) < config.straightness_threshold
}

pub fn is_low_curvature(curve: &CubicBez, config: &RegularizeConfig) -> bool {
    max_curvature(curve) < config.curvature_threshold
}
