//! Random simple polygons in 2D (star-shaped, radial jitter).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and emit the points in angle order.
//! - Angular jitter is clamped below half the spacing, so angles stay strictly
//!   increasing and every gap is below 2Δ. For `n >= 4` each gap is below π,
//!   the origin lies in the kernel, and the boundary is simple and CCW.
//! - Radial jitter can push vertices towards the origin, which produces reflex
//!   corners for the ear clipper to work around.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Vertex;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter. Radii = `base_radius * (1 + u)`, `u∈[-radial_jitter, radial_jitter]`,
    /// floored at `0.05 * base_radius`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(16),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.6,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Draw a star-shaped polygon; ids are `0..n` in boundary order.
pub fn draw_star_polygon(cfg: &StarCfg, seed: u64) -> Vec<Vertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };

    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(0.05) * r0;
            let p = Vector2::new(th.cos(), th.sin()) * r;
            Vertex::new(p.x, p.y, k as i64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::signed_area;

    #[test]
    fn reproducible_draw() {
        let cfg = StarCfg::default();
        let a = draw_star_polygon(&cfg, 42);
        let b = draw_star_polygon(&cfg, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        let c = draw_star_polygon(&cfg, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn uniform_count_respects_bounds() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 1, max: 9 },
            ..StarCfg::default()
        };
        for seed in 0..50 {
            let n = draw_star_polygon(&cfg, seed).len();
            assert!((3..=9).contains(&n), "n = {n}");
        }
    }

    #[test]
    fn draws_are_ccw() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 4, max: 40 },
            ..StarCfg::default()
        };
        for seed in 0..50 {
            let vs = draw_star_polygon(&cfg, seed);
            assert!(signed_area(&vs) > 0.0, "seed {seed}");
        }
    }
}
