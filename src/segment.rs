//! Input segments and regularized output primitives.

use kurbo::{CubicBez, Line, PathEl, Point, QuadBez};
use serde::{Deserialize, Serialize};

use crate::geom::points_finite;

/// One input path segment, as parsed from a drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Line(Line),
    /// Degree-elevated to a cubic before classification.
    Quad(QuadBez),
    Cubic(CubicBez),
}

impl Segment {
    pub fn start(&self) -> Point {
        match self {
            Segment::Line(l) => l.p0,
            Segment::Quad(q) => q.p0,
            Segment::Cubic(c) => c.p0,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Segment::Line(l) => l.p1,
            Segment::Quad(q) => q.p2,
            Segment::Cubic(c) => c.p3,
        }
    }

    /// True when every coordinate (control points included) is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Segment::Line(l) => points_finite(&[l.p0, l.p1]),
            Segment::Quad(q) => points_finite(&[q.p0, q.p1, q.p2]),
            Segment::Cubic(c) => points_finite(&[c.p0, c.p1, c.p2, c.p3]),
        }
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Segment::Line(line)
    }
}

impl From<QuadBez> for Segment {
    fn from(quad: QuadBez) -> Self {
        Segment::Quad(quad)
    }
}

impl From<CubicBez> for Segment {
    fn from(curve: CubicBez) -> Self {
        Segment::Cubic(curve)
    }
}

/// A canonical primitive produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegularizedPrimitive {
    Line(Line),
    /// Two legs meeting at a corner: start→corner, corner→end.
    /// One output element, not two.
    CornerPair(Line, Line),
    Curve(CubicBez),
}

impl RegularizedPrimitive {
    pub fn start(&self) -> Point {
        match self {
            RegularizedPrimitive::Line(l) => l.p0,
            RegularizedPrimitive::CornerPair(first, _) => first.p0,
            RegularizedPrimitive::Curve(c) => c.p0,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            RegularizedPrimitive::Line(l) => l.p1,
            RegularizedPrimitive::CornerPair(_, second) => second.p1,
            RegularizedPrimitive::Curve(c) => c.p3,
        }
    }

    /// Straight pieces of this primitive; empty for curves.
    pub fn lines(&self) -> Vec<Line> {
        match *self {
            RegularizedPrimitive::Line(l) => vec![l],
            RegularizedPrimitive::CornerPair(a, b) => vec![a, b],
            RegularizedPrimitive::Curve(_) => vec![],
        }
    }

    /// Path elements drawing this primitive from its start point.
    ///
    /// The leading `MoveTo` is left to the caller so consecutive
    /// primitives can be chained into one `BezPath`.
    pub fn to_path_els(&self) -> Vec<PathEl> {
        match *self {
            RegularizedPrimitive::Line(l) => vec![PathEl::LineTo(l.p1)],
            RegularizedPrimitive::CornerPair(a, b) => {
                vec![PathEl::LineTo(a.p1), PathEl::LineTo(b.p1)]
            }
            RegularizedPrimitive::Curve(c) => vec![PathEl::CurveTo(c.p1, c.p2, c.p3)],
        }
    }
}

/// Per-class primitive counts for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimitiveCounts {
    pub lines: usize,
    pub corner_pairs: usize,
    pub curves: usize,
}

impl PrimitiveCounts {
    pub fn tally(primitives: &[RegularizedPrimitive]) -> Self {
        let mut counts = Self::default();
        for p in primitives {
            match p {
                RegularizedPrimitive::Line(_) => counts.lines += 1,
                RegularizedPrimitive::CornerPair(..) => counts.corner_pairs += 1,
                RegularizedPrimitive::Curve(_) => counts.curves += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.lines + self.corner_pairs + self.curves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_per_variant() {
        let quad = Segment::Quad(QuadBez::new((0.0, 0.0), (1.0, 2.0), (3.0, 0.0)));
        assert_eq!(quad.start(), Point::new(0.0, 0.0));
        assert_eq!(quad.end(), Point::new(3.0, 0.0));

        let corner = RegularizedPrimitive::CornerPair(
            Line::new((0.0, 0.0), (0.0, 1.0)),
            Line::new((0.0, 1.0), (1.0, 1.0)),
        );
        assert_eq!(corner.start(), Point::new(0.0, 0.0));
        assert_eq!(corner.end(), Point::new(1.0, 1.0));
        assert_eq!(corner.lines().len(), 2);
    }

    #[test]
    fn corner_pair_draws_two_line_tos() {
        let corner = RegularizedPrimitive::CornerPair(
            Line::new((0.0, 0.0), (0.0, 1.0)),
            Line::new((0.0, 1.0), (1.0, 1.0)),
        );
        assert_eq!(
            corner.to_path_els(),
            vec![
                PathEl::LineTo(Point::new(0.0, 1.0)),
                PathEl::LineTo(Point::new(1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn tally_counts_each_class() {
        let line = RegularizedPrimitive::Line(Line::new((0.0, 0.0), (1.0, 0.0)));
        let curve = RegularizedPrimitive::Curve(CubicBez::new(
            (0.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (1.0, 0.0),
        ));
        let counts = PrimitiveCounts::tally(&[line, curve, curve]);
        assert_eq!(
            counts,
            PrimitiveCounts {
                lines: 1,
                corner_pairs: 0,
                curves: 2
            }
        );
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn non_finite_control_point_detected() {
        let curve = Segment::Cubic(CubicBez::new(
            (0.0, 0.0),
            (f64::NAN, 1.0),
            (1.0, 1.0),
            (1.0, 0.0),
        ));
        assert!(!curve.is_finite());
        assert!(Segment::Line(Line::new((0.0, 0.0), (1.0, 0.0))).is_finite());
    }

    #[test]
    fn json_shape() {
        let seg = Segment::Line(Line::new((0.0, 0.0), (1.0, 0.0)));
        let json = serde_json::to_string(&seg).unwrap_or_default();
        assert!(json.starts_with(r#"{"line":"#), "unexpected json: {json}");
    }
}
