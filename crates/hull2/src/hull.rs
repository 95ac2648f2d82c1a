//! QuickHull for finite 2D point sets.
//!
//! Purpose
//! - Production hull routine for canvas-scale inputs (hundreds of points,
//!   recomputed from scratch on every request).
//!
//! Why this design (short)
//! - Divide and conquer on the farthest point from a candidate edge; points
//!   that fall inside a processed triangle are discarded immediately, so the
//!   average case stays O(N log N) with an O(N^2) worst case on near-hull
//!   inputs, which is fine at this scale.
//! - Emission order is counter-clockwise by construction: the recursion on
//!   edge (a, c) finishes before `c`, which precedes the recursion on (c, b).
//!
//! Assumptions and conventions
//! - Orientation predicates compare unnormalized cross products against
//!   `HullCfg::eps`; points with |cross| <= eps count as on-line and can
//!   never become hull vertices.
//! - Non-finite coordinates are filtered out up front; duplicates are removed
//!   by exact equality after a lexicographic sort. Both are defensive: the
//!   host's point store already dedups, but the contract does not rely on it.
//!
//! Code cross-refs: `types::{Hull, HullCfg}`, `pointset::PointSet`.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::types::{cross, Hull, HullCfg};

/// Convex hull with default tolerances. See [`compute_hull_cfg`].
#[inline]
pub fn compute_hull(points: &[Vector2<f64>]) -> Hull {
    compute_hull_cfg(points, HullCfg::default())
}

/// Convex hull of `points` via QuickHull.
///
/// Returns the ordered hull boundary: `Empty`/`Point`/`Segment` for fewer
/// than 3 effective points (a fully collinear set collapses to the segment
/// between its two extremes), otherwise `Polygon` with vertices in
/// counter-clockwise order starting at the lexicographically smallest point.
///
/// Pure function of the input *set*: permutations, duplicates, and
/// non-finite entries do not change the result.
pub fn compute_hull_cfg(points: &[Vector2<f64>], cfg: HullCfg) -> Hull {
    let mut pts: Vec<Vector2<f64>> = points
        .iter()
        .copied()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    pts.sort_by(cmp_xy);
    pts.dedup();
    match pts.len() {
        0 => return Hull::Empty,
        1 => return Hull::Point(pts[0]),
        2 => return Hull::Segment(pts[0], pts[1]),
        _ => {}
    }

    // The lexicographic extremes are unconditionally hull vertices. Using the
    // full (x, y) order keeps vertical collinear sets from collapsing onto a
    // single extreme.
    let lo = pts[0];
    let hi = pts[pts.len() - 1];

    // Split by side of the chord lo→hi; on-line points are dropped here.
    let below: Vec<Vector2<f64>> = pts
        .iter()
        .copied()
        .filter(|&p| cross(lo, hi, p) < -cfg.eps)
        .collect();
    let above: Vec<Vector2<f64>> = pts
        .iter()
        .copied()
        .filter(|&p| cross(hi, lo, p) < -cfg.eps)
        .collect();
    if below.is_empty() && above.is_empty() {
        // Every point sits on the chord: degenerate collinear hull.
        return Hull::Segment(lo, hi);
    }

    let mut out: Vec<Vector2<f64>> = Vec::with_capacity(8);
    out.push(lo);
    expand(lo, hi, &below, cfg.eps, &mut out);
    out.push(hi);
    expand(hi, lo, &above, cfg.eps, &mut out);
    Hull::Polygon(out)
}

/// Emit the hull vertices strictly between `a` and `b`, given the subset of
/// points strictly right of the directed line a→b.
///
/// The farthest point from the line is a hull vertex; the rest of the subset
/// is partitioned against the two new edges, discarding everything inside
/// triangle a-b-far (on-edge points included). Recursion depth is bounded by
/// the number of hull vertices emitted, not by the input size.
fn expand(
    a: Vector2<f64>,
    b: Vector2<f64>,
    outside: &[Vector2<f64>],
    eps: f64,
    out: &mut Vec<Vector2<f64>>,
) {
    if outside.is_empty() {
        return;
    }
    // Farthest = most negative cross (unnormalized distance ranking is
    // enough for a fixed edge). Ties break lexicographically so the result
    // does not depend on subset order.
    let mut far = outside[0];
    let mut best = cross(a, b, far);
    for &p in &outside[1..] {
        let d = cross(a, b, p);
        if d < best || (d == best && cmp_xy(&p, &far) == Ordering::Less) {
            best = d;
            far = p;
        }
    }
    let first: Vec<Vector2<f64>> = outside
        .iter()
        .copied()
        .filter(|&p| cross(a, far, p) < -eps)
        .collect();
    let second: Vec<Vector2<f64>> = outside
        .iter()
        .copied()
        .filter(|&p| cross(far, b, p) < -eps)
        .collect();
    expand(a, far, &first, eps, out);
    out.push(far);
    expand(far, b, &second, eps, out);
}

/// Total lexicographic order on (x, y). Inputs are pre-filtered to finite
/// coordinates, so the `partial_cmp` fallback never fires in practice.
#[inline]
fn cmp_xy(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}
