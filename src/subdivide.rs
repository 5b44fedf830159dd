//! Bounded curve subdivision for segments no canonical class fits.

use kurbo::CubicBez;

use crate::geom::split_at;

/// Hard cap on recursive re-classification depth.
pub const MAX_RECURSION_DEPTH: usize = 8;

/// Hard cap on split points per curve.
pub const MAX_SUBDIVISION_COUNT: usize = 64;

/// Upper bound on primitives one segment may expand into,
/// `(subdivision_count + 1)^(depth + 1)`.
pub const MAX_PIECES_PER_SEGMENT: usize = 1 << 16;

/// Worst-case number of pieces for `n` splits refined to `depth`.
///
/// `None` on overflow.
pub fn worst_case_pieces(n: usize, depth: usize) -> Option<usize> {
    let exp = u32::try_from(depth.min(MAX_RECURSION_DEPTH) + 1).ok()?;
    n.checked_add(1)?.checked_pow(exp)
}

/// Split `curve` into `n + 1` contiguous pieces.
///
/// Each step splits the remaining right-hand curve at relative position
/// `(i + 1) / (n + 1)`. Pieces chain exactly: every piece starts where the
/// previous one ends, and the first/last share the original endpoints.
/// `n` is clamped to [`MAX_SUBDIVISION_COUNT`].
pub fn subdivide(curve: &CubicBez, n: usize) -> Vec<CubicBez> {
    let n = n.min(MAX_SUBDIVISION_COUNT);
    let mut pieces = Vec::with_capacity(n + 1);
    let mut rest = *curve;
    let denom = (n + 1) as f64;
    for i in 0..n {
        let t = (i + 1) as f64 / denom;
        let (left, right) = split_at(&rest, t);
        pieces.push(left);
        rest = right;
    }
    pieces.push(rest);
    pieces
}
