//! Random star-shaped polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic obstacle/body shapes for property tests, benchmarks and the
//!   CLI `sample` command.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and connect the points in angle order. Angles stay sorted,
//!   gaps stay below π and radii positive, so the result is star-shaped
//!   around `center`, simple and counter-clockwise.
//! - A replay token `(seed, index)` seeds the generator directly, so any
//!   single draw can be reproduced without replaying the ones before it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::kernel::centroid;
use super::types::{Cartesian, GeomError, Polygon};
use super::units::Meters;

/// How many corners an obstacle gets. Anything below 3 is raised to 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexCount {
    Exactly(usize),
    /// Uniform over `lo..=hi`.
    Between { lo: usize, hi: usize },
}

impl VertexCount {
    fn draw<R: Rng>(self, rng: &mut R) -> usize {
        match self {
            VertexCount::Exactly(n) => n.max(3),
            VertexCount::Between { lo, hi } => {
                let lo = lo.max(3);
                rng.gen_range(lo..=hi.max(lo))
            }
        }
    }
}

/// Shape of a sampled obstacle.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Each corner's angle moves by up to this fraction of the even spacing
    /// `2π/n`. Capped below 0.5 so corners never swap order.
    pub angle_jitter_frac: f64,
    /// Each corner's distance from `center` is `base_radius` scaled by a
    /// factor in `1 ± radial_jitter`. Capped below 1.
    pub radial_jitter: f64,
    pub base_radius: Meters,
    pub center: Cartesian,
    /// Rotate the whole shape by a random angle; otherwise corner 0 sits on
    /// the +x axis (before jitter).
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Exactly(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: Meters::new(1.0),
            center: Cartesian::default(),
            random_phase: true,
        }
    }
}

/// Names one draw: the same `(seed, index)` always yields the same polygon,
/// and neighbouring indices give unrelated ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Generator for this draw, seeded from both halves of the token.
    pub fn rng(self) -> StdRng {
        let mut bytes = <StdRng as SeedableRng>::Seed::default();
        bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(bytes)
    }
}

/// Draw a random simple (star-shaped) polygon, counter-clockwise.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    // Gaps between consecutive angles stay below π, so `center` is interior.
    let aj = cfg
        .angle_jitter_frac
        .clamp(0.0, 0.49)
        .min(0.99 * (n as f64 - 2.0) / 4.0);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.meters().max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    // jitter < Δ/2 keeps the angles strictly increasing
    let vertices = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let th = base + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Cartesian::from_meters(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon { vertices }
}

/// Translate `poly` so its area centroid sits at `target`.
pub fn recenter(poly: &Polygon, target: Cartesian) -> Result<Polygon, GeomError> {
    let c = centroid(poly)?;
    Ok(poly.translated(target - c))
}
