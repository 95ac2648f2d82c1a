//! Random point scatters for demos, benchmarks, and tests.
//!
//! Purpose
//! - Stand-in for a user clicking points onto a canvas: draw up to `count`
//!   points inside a width × height rectangle with a margin inset, either
//!   uniformly or clustered toward the canvas the way the interactive demo
//!   scatters them.
//!
//! Model
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw k of an experiment can be regenerated in isolation.
//!
//! Code cross-refs: `pointset::PointSet`, `hull::compute_hull`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pointset::MAX_POINTS;

/// How points distribute over the inset rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spread {
    /// Uniform over the inset rectangle.
    Uniform,
    /// Folded Gaussian offsets wrapped into the inset rectangle; produces the
    /// center-heavy scatter of the interactive demo.
    Clustered,
}

/// Scatter configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    /// Canvas extent. Clamped to >= 1.
    pub width: f64,
    pub height: f64,
    /// Inset kept free of points on every side. Clamped below half the
    /// smaller canvas extent.
    pub margin: f64,
    pub spread: Spread,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: MAX_POINTS,
            width: 800.0,
            height: 600.0,
            margin: 50.0,
            spread: Spread::Clustered,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random point scatter.
///
/// Coordinates land in `[margin, width - margin) × [margin, height - margin)`.
/// Exact duplicate coordinates are possible in principle; downstream
/// consumers (`PointSet`, `compute_hull`) dedup defensively.
pub fn draw_scatter(cfg: ScatterCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let w = cfg.width.max(1.0);
    let h = cfg.height.max(1.0);
    let m = cfg.margin.clamp(0.0, 0.49 * w.min(h));
    (0..cfg.count)
        .map(|_| {
            let x = sample_coord(&mut rng, cfg.spread, w, m);
            let y = sample_coord(&mut rng, cfg.spread, h, m);
            Vector2::new(x, y)
        })
        .collect()
}

fn sample_coord<R: Rng>(rng: &mut R, spread: Spread, extent: f64, margin: f64) -> f64 {
    let inner = extent - 2.0 * margin;
    match spread {
        Spread::Uniform => rng.gen::<f64>() * inner + margin,
        Spread::Clustered => (gauss(rng) * extent).rem_euclid(inner) + margin,
    }
}

/// Standard normal sample via Box–Muller; one value per call is plenty here.
fn gauss<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
