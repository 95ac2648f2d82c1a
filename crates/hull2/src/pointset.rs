//! Bounded, de-duplicating point store for canvas-style hosts.
//!
//! The hosting layer (a canvas widget, the CLI) accumulates clicked or
//! generated points one at a time, bounded by a maximum count, with exact
//! duplicates ignored. `PointSet` models that collection and hands the hull
//! routine a snapshot slice on request.

use nalgebra::Vector2;

use crate::hull::compute_hull_cfg;
use crate::types::{Hull, HullCfg};

/// Default point capacity for interactive canvases.
pub const MAX_POINTS: usize = 200;

/// Insertion-ordered point collection with set semantics and a hard capacity.
///
/// Invariants:
/// - No two stored points are exactly equal.
/// - All stored points have finite coordinates.
/// - `len() <= capacity()` at all times.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Vector2<f64>>,
    capacity: usize,
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSet {
    /// Empty set with the default [`MAX_POINTS`] capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_POINTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::new(),
            capacity,
        }
    }

    /// Insert a point; returns whether it was stored.
    ///
    /// Rejected without error: non-finite coordinates, exact duplicates, and
    /// inserts past capacity. Duplicate lookup is a linear scan; capacities
    /// here are a few hundred at most.
    pub fn insert(&mut self, p: Vector2<f64>) -> bool {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return false;
        }
        if self.points.len() >= self.capacity {
            return false;
        }
        if self.points.contains(&p) {
            return false;
        }
        self.points.push(p);
        true
    }

    /// Insert each point in order; returns how many were stored.
    pub fn extend_from(&mut self, pts: &[Vector2<f64>]) -> usize {
        pts.iter().filter(|&&p| self.insert(p)).count()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector2<f64>> {
        self.points.iter()
    }

    /// Hull of the current snapshot with default tolerances.
    pub fn hull(&self) -> Hull {
        self.hull_cfg(HullCfg::default())
    }

    pub fn hull_cfg(&self, cfg: HullCfg) -> Hull {
        compute_hull_cfg(&self.points, cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn insert_dedups_and_bounds() {
        let mut set = PointSet::with_capacity(3);
        assert!(set.insert(vector![1.0, 1.0]));
        assert!(!set.insert(vector![1.0, 1.0])); // exact duplicate
        assert!(set.insert(vector![2.0, 2.0]));
        assert!(set.insert(vector![3.0, 3.0]));
        assert!(set.is_full());
        assert!(!set.insert(vector![4.0, 4.0])); // over capacity
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn insert_rejects_non_finite() {
        let mut set = PointSet::new();
        assert!(!set.insert(vector![f64::NAN, 0.0]));
        assert!(!set.insert(vector![0.0, f64::NEG_INFINITY]));
        assert!(set.is_empty());
    }

    #[test]
    fn clear_resets() {
        let mut set = PointSet::new();
        set.insert(vector![1.0, 0.0]);
        set.insert(vector![0.0, 1.0]);
        assert_eq!(set.len(), 2);
        set.clear();
        assert!(set.is_empty());
        assert!(set.insert(vector![1.0, 0.0])); // reusable after clear
    }

    #[test]
    fn hull_of_snapshot() {
        let mut set = PointSet::new();
        let stored = set.extend_from(&[
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
            vector![5.0, 5.0],
        ]);
        assert_eq!(stored, 5);
        let hull = set.hull();
        assert!(hull.is_polygon());
        assert_eq!(hull.len(), 4);
        // Computing the hull does not consume or mutate the set.
        assert_eq!(set.len(), 5);
    }
}
