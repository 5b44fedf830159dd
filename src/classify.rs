//! Per-segment decision cascade.
//!
//! Each segment goes through exactly one branch, in priority order:
//! line passthrough → right-angle corner → straight line → subdivision.

use kurbo::{CubicBez, Line, Point};

use crate::config::RegularizeConfig;
use crate::geom::has_degenerate_chord;
use crate::metrics::{is_low_curvature, is_mostly_straight, right_angle_corner};
use crate::segment::{RegularizedPrimitive, Segment};
use crate::subdivide::{subdivide, MAX_RECURSION_DEPTH};

/// Which branch of the cascade a curve takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Start and end coincide; collapsed to a zero-length line.
    Degenerate,
    /// Two legs meeting at this control point.
    RightAngle(Point),
    LowCurvature,
    /// Curvature is not low but the curve never strays from its chord.
    MostlyStraight,
    Subdivided,
}

/// Classify one segment into one or more primitives.
pub fn classify(segment: &Segment, config: &RegularizeConfig) -> Vec<RegularizedPrimitive> {
    let depth = config.max_depth.min(MAX_RECURSION_DEPTH);
    match *segment {
        Segment::Line(line) => vec![RegularizedPrimitive::Line(line)],
        Segment::Quad(quad) => classify_curve(&quad.raise(), config, depth),
        Segment::Cubic(curve) => classify_curve(&curve, config, depth),
    }
}

/// Pick the cascade branch for a curve.
pub fn decide(curve: &CubicBez, config: &RegularizeConfig) -> Decision {
    if has_degenerate_chord(curve) {
        Decision::Degenerate
    } else if let Some(corner) = right_angle_corner(curve, config) {
        Decision::RightAngle(corner)
    } else if is_low_curvature(curve, config) {
        Decision::LowCurvature
    } else if is_mostly_straight(curve, config) {
        Decision::MostlyStraight
    } else {
        Decision::Subdivided
    }
}

fn classify_curve(
    curve: &CubicBez,
    config: &RegularizeConfig,
    depth: usize,
) -> Vec<RegularizedPrimitive> {
    let chord = Line::new(curve.p0, curve.p3);

    match decide(curve, config) {
        Decision::Degenerate => {
            log::debug!("degenerate chord at {:?}, collapsing to point line", curve.p0);
            vec![RegularizedPrimitive::Line(chord)]
        }
        Decision::RightAngle(corner) => {
            log::debug!("right angle at {:?}", corner);
            vec![RegularizedPrimitive::CornerPair(
                Line::new(curve.p0, corner),
                Line::new(corner, curve.p3),
            )]
        }
        Decision::LowCurvature | Decision::MostlyStraight => {
            vec![RegularizedPrimitive::Line(chord)]
        }
        Decision::Subdivided => {
            let pieces = subdivide(curve, config.subdivision_count);
            log::debug!("subdivided into {} pieces (depth {})", pieces.len(), depth);
            if depth == 0 {
                return pieces.into_iter().map(RegularizedPrimitive::Curve).collect();
            }
            pieces
                .iter()
                .flat_map(|piece| classify_curve(piece, config, depth - 1))
                .collect()
        }
    }
}
