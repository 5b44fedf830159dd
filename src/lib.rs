//! bezreg: freeform bezier segments → regularized primitives.
//!
//! Cleans up imprecise hand-drawn or digitized vector art by replacing
//! each path segment with a canonical shape: a straight line, a pair of
//! lines meeting at a right angle, or (when nothing simpler fits) a few
//! shorter curve pieces.
//!
//! The output is a sequence of [`RegularizedPrimitive`] values in input
//! order. A right-angle corner is a single `CornerPair` element holding
//! both legs, so it counts once in the output length even though it draws
//! as two lines (see [`RegularizedPrimitive::to_path_els`]).
//!
//! # Example
//!
//! ```
//! use bezreg::kurbo::{CubicBez, Line};
//! use bezreg::{regularize, RegularizeConfig, RegularizedPrimitive, Segment};
//!
//! let segments = [
//!     Segment::Line(Line::new((0.0, 0.0), (10.0, 0.0))),
//!     Segment::Cubic(CubicBez::new((0.0, 0.0), (0.0, 1.0), (0.0, 1.0), (1.0, 1.0))),
//! ];
//! let out = regularize(&segments, &RegularizeConfig::default())?;
//! assert!(matches!(out[1], RegularizedPrimitive::CornerPair(..)));
//! # Ok::<(), bezreg::RegularizeError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod geom;
mod segment;

pub mod classify;
pub mod error;
pub mod metrics;
pub mod subdivide;

// Re-export kurbo so callers build segments with the same version.
pub use kurbo;

pub use classify::{classify, Decision};
pub use config::RegularizeConfig;
pub use error::RegularizeError;
pub use segment::{PrimitiveCounts, RegularizedPrimitive, Segment};
pub use subdivide::{MAX_RECURSION_DEPTH, MAX_SUBDIVISION_COUNT};

use rayon::prelude::*;
use std::time::Instant;

/// Regularize segments in order, one after another.
///
/// Every input segment yields at least one primitive, and the output
/// keeps input order.
pub fn regularize(
    segments: &[Segment],
    config: &RegularizeConfig,
) -> Result<Vec<RegularizedPrimitive>, RegularizeError> {
    let t_start = Instant::now();
    check_input(segments, config)?;

    let primitives: Vec<RegularizedPrimitive> = segments
        .iter()
        .flat_map(|segment| classify(segment, config))
        .collect();

    log_summary(segments.len(), &primitives, t_start);
    Ok(primitives)
}

/// Same as [`regularize`], classifying segments across the rayon pool.
///
/// Results are collected by input index, so the output is identical
/// to the sequential version.
pub fn regularize_parallel(
    segments: &[Segment],
    config: &RegularizeConfig,
) -> Result<Vec<RegularizedPrimitive>, RegularizeError> {
    let t_start = Instant::now();
    check_input(segments, config)?;

    let per_segment: Vec<Vec<RegularizedPrimitive>> = segments
        .par_iter()
        .map(|segment| classify(segment, config))
        .collect();
    let primitives: Vec<RegularizedPrimitive> = per_segment.into_iter().flatten().collect();

    log_summary(segments.len(), &primitives, t_start);
    Ok(primitives)
}

fn check_input(segments: &[Segment], config: &RegularizeConfig) -> Result<(), RegularizeError> {
    config.validate()?;
    match segments.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(RegularizeError::NonFinite { index }),
        None => Ok(()),
    }
}

fn log_summary(n_in: usize, primitives: &[RegularizedPrimitive], t_start: Instant) {
    let counts = PrimitiveCounts::tally(primitives);
    log::info!(
        "regularized {} segments \u{2192} {} primitives ({} lines, {} corners, {} curves) in {}ms",
        n_in,
        counts.total(),
        counts.lines,
        counts.corner_pairs,
        counts.curves,
        t_start.elapsed().as_millis(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{CubicBez, Line, Point};

    fn mixed_input() -> Vec<Segment> {
        vec![
            Segment::Line(Line::new((5.0, 5.0), (9.0, 5.0))),
            Segment::Cubic(CubicBez::new((0.0, 0.0), (0.0, 1.0), (0.0, 1.0), (1.0, 1.0))),
            Segment::Cubic(CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0))),
        ]
    }

    #[test]
    fn end_to_end_counts_and_order() {
        let input = mixed_input();
        let config = RegularizeConfig {
            subdivision_count: 2,
            ..RegularizeConfig::default()
        };
        let Ok(out) = regularize(&input, &config) else {
            panic!("regularize failed");
        };

        // 1 line, 1 corner pair (two legs), 3 subdivided curve pieces.
        assert_eq!(out.len(), 5);
        let drawn: usize = out.iter().map(|p| p.to_path_els().len()).sum();
        assert_eq!(drawn, 1 + 2 + 3);

        assert_eq!(out[0], RegularizedPrimitive::Line(Line::new((5.0, 5.0), (9.0, 5.0))));
        assert!(matches!(out[1], RegularizedPrimitive::CornerPair(..)));
        assert_eq!(out[1].start(), Point::new(0.0, 0.0));
        assert_eq!(out[1].end(), Point::new(1.0, 1.0));
        assert!(out[2..]
            .iter()
            .all(|p| matches!(p, RegularizedPrimitive::Curve(_))));
        assert_eq!(out[2].start(), Point::new(0.0, 0.0));
        assert_eq!(out[4].end(), Point::new(1.0, 0.0));
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut input = Vec::new();
        for i in 0..64 {
            let dx = i as f64 * 3.0;
            input.extend(mixed_input().into_iter().map(|s| match s {
                Segment::Line(l) => Segment::Line(Line::new(
                    (l.p0.x + dx, l.p0.y),
                    (l.p1.x + dx, l.p1.y),
                )),
                Segment::Cubic(c) => Segment::Cubic(CubicBez::new(
                    (c.p0.x + dx, c.p0.y),
                    (c.p1.x + dx, c.p1.y),
                    (c.p2.x + dx, c.p2.y),
                    (c.p3.x + dx, c.p3.y),
                )),
                other => other,
            }));
        }
        let config = RegularizeConfig::default();
        let sequential = regularize(&input, &config).ok();
        let parallel = regularize_parallel(&input, &config).ok();
        assert!(sequential.is_some());
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn no_segment_is_dropped() {
        let input = vec![
            Segment::Line(Line::new((1.0, 1.0), (1.0, 1.0))),
            Segment::Cubic(CubicBez::new((2.0, 2.0), (2.0, 2.0), (2.0, 2.0), (2.0, 2.0))),
        ];
        let out = regularize(&input, &RegularizeConfig::default()).unwrap_or_default();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], RegularizedPrimitive::Line(Line::new((2.0, 2.0), (2.0, 2.0))));
    }

    #[test]
    fn empty_input_is_empty_output() {
        let out = regularize(&[], &RegularizeConfig::default()).ok();
        assert_eq!(out, Some(vec![]));
    }

    #[test]
    fn non_finite_segment_is_rejected() {
        let input = vec![
            Segment::Line(Line::new((0.0, 0.0), (1.0, 0.0))),
            Segment::Line(Line::new((0.0, f64::NAN), (1.0, 0.0))),
        ];
        let err = regularize_parallel(&input, &RegularizeConfig::default());
        assert!(matches!(err, Err(RegularizeError::NonFinite { index: 1 })));
    }

    #[test]
    fn unbounded_subdivision_is_rejected_before_work() {
        let config = RegularizeConfig {
            subdivision_count: usize::MAX,
            ..RegularizeConfig::default()
        };
        let err = regularize(&mixed_input(), &config);
        assert!(matches!(err, Err(RegularizeError::InvalidConfig(_))));
        let err = regularize_parallel(&mixed_input(), &config);
        assert!(matches!(err, Err(RegularizeError::InvalidConfig(_))));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RegularizeConfig {
            straightness_samples: 0,
            ..RegularizeConfig::default()
        };
        let err = regularize(&mixed_input(), &config);
        assert!(matches!(err, Err(RegularizeError::InvalidConfig(_))));
    }
}
