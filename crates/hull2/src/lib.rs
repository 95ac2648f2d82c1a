//! Convex hulls for interactive 2D point canvases.
//!
//! Purpose
//! - Provide the computational core of a point-canvas demo: QuickHull over a
//!   finite set of planar points, plus the bounded point store and random
//!   scatter the hosting layer drives it with.
//!
//! Why this design (short)
//! - The host (canvas, CLI) only ever hands over a snapshot slice of points
//!   and consumes an ordered boundary; everything here is a pure function of
//!   that slice. No state survives a call.
//! - Degenerate inputs (empty, single point, collinear sets) are ordinary
//!   results, not errors; callers branch on the [`Hull`] classification.
//!
//! Code cross-refs: `hull::compute_hull`, `types::{Hull, HullCfg}`,
//! `pointset::PointSet`, `scatter::draw_scatter`.

pub mod hull;
pub mod pointset;
pub mod scatter;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export so callers share the same vector type.
pub use nalgebra::Vector2 as Vec2;

pub use hull::{compute_hull, compute_hull_cfg};
pub use types::{Hull, HullCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{compute_hull, compute_hull_cfg};
    pub use crate::pointset::{PointSet, MAX_POINTS};
    pub use crate::scatter::{draw_scatter, ReplayToken, ScatterCfg, Spread};
    pub use crate::types::{Hull, HullCfg};
    pub use nalgebra::Vector2 as Vec2;
}
