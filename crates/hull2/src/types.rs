//! Result classification and tolerances for hull computation.
//!
//! - `HullCfg`: centralizes the epsilon used by orientation predicates.
//! - `Hull`: what a point set's convex hull actually is — possibly a
//!   degenerate point or segment, not only a polygon.
//!
//! Code cross-refs: `hull::compute_hull_cfg`, `pointset::PointSet`.

use nalgebra::Vector2;

/// Hull configuration (tolerances).
///
/// `eps` is an absolute tolerance compared against unnormalized cross
/// products when classifying a point as left of / right of / on a directed
/// line. Inputs are expected at pixel-like scales, where a fixed absolute
/// tolerance is adequate; callers with very large coordinates should scale
/// down first.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    pub eps: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self { eps: 1e-9 }
    }
}

/// Convex hull of a finite planar point set.
///
/// Invariants:
/// - `Polygon` holds >= 3 vertices in counter-clockwise order, starting at
///   the lexicographically smallest vertex, first vertex not repeated at the
///   end.
/// - `Segment` endpoints are distinct; `Point`/`Segment`/`Polygon` vertices
///   are always members of the input set.
#[derive(Clone, Debug, PartialEq)]
pub enum Hull {
    Empty,
    Point(Vector2<f64>),
    Segment(Vector2<f64>, Vector2<f64>),
    Polygon(Vec<Vector2<f64>>),
}

impl Hull {
    /// Number of boundary vertices (0, 1, 2, or the polygon length).
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Hull::Empty => 0,
            Hull::Point(_) => 1,
            Hull::Segment(_, _) => 2,
            Hull::Polygon(vs) => vs.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Hull::Empty)
    }

    #[inline]
    pub fn is_polygon(&self) -> bool {
        matches!(self, Hull::Polygon(_))
    }

    /// True for hulls with fewer than 3 vertices ("nothing to fill").
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.is_polygon()
    }

    /// Ordered boundary vertices; not explicitly closed. Callers rendering a
    /// polygon repeat the first vertex themselves.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        match self {
            Hull::Empty => Vec::new(),
            Hull::Point(p) => vec![*p],
            Hull::Segment(a, b) => vec![*a, *b],
            Hull::Polygon(vs) => vs.clone(),
        }
    }

    /// Membership check with slack (eps >= 0 enlarges the hull).
    ///
    /// For `Polygon` the slack applies to unnormalized edge cross products,
    /// for `Point`/`Segment` to Euclidean distance.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        match self {
            Hull::Empty => false,
            Hull::Point(q) => (p - q).norm() <= eps,
            Hull::Segment(a, b) => dist_to_segment(p, *a, *b) <= eps,
            Hull::Polygon(vs) => (0..vs.len()).all(|i| {
                let a = vs[i];
                let b = vs[(i + 1) % vs.len()];
                cross(a, b, p) >= -eps
            }),
        }
    }

    /// Enclosed area via the shoelace formula; 0 for degenerate hulls.
    pub fn area(&self) -> f64 {
        match self {
            Hull::Polygon(vs) => {
                let mut acc = 0.0;
                for i in 0..vs.len() {
                    let p = vs[i];
                    let q = vs[(i + 1) % vs.len()];
                    acc += p.x * q.y - q.x * p.y;
                }
                0.5 * acc
            }
            _ => 0.0,
        }
    }
}

#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

fn dist_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn polygon_contains_and_area() {
        let square = Hull::Polygon(vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ]);
        assert!((square.area() - 100.0).abs() < 1e-12);
        assert!(square.contains_eps(vector![5.0, 5.0], 1e-9));
        assert!(square.contains_eps(vector![0.0, 0.0], 1e-9)); // boundary
        assert!(!square.contains_eps(vector![10.1, 5.0], 1e-9));
    }

    #[test]
    fn degenerate_membership() {
        assert!(!Hull::Empty.contains_eps(vector![0.0, 0.0], 1e-9));
        let pt = Hull::Point(vector![1.0, 2.0]);
        assert!(pt.contains_eps(vector![1.0, 2.0], 1e-9));
        assert!(!pt.contains_eps(vector![1.0, 2.1], 1e-9));
        let seg = Hull::Segment(vector![0.0, 0.0], vector![4.0, 0.0]);
        assert!(seg.contains_eps(vector![2.0, 0.0], 1e-9));
        assert!(seg.contains_eps(vector![4.0, 0.0], 1e-9));
        assert!(!seg.contains_eps(vector![2.0, 0.5], 1e-9));
        assert!(!seg.contains_eps(vector![5.0, 0.0], 1e-9));
        assert_eq!(seg.len(), 2);
        assert!(seg.is_degenerate());
    }

    #[test]
    fn vertices_order_is_preserved() {
        let tri = Hull::Polygon(vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 1.0],
        ]);
        let vs = tri.vertices();
        assert_eq!(vs.len(), 3);
        assert_eq!(vs[0], vector![0.0, 0.0]);
        assert_eq!(vs[2], vector![1.0, 1.0]);
    }
}
