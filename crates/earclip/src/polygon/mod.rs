//! Polygon topology engine and O(n²) ear clipping.
//!
//! Model
//! - Vertices live in a fixed array; the shrinking boundary is an index arena
//!   of `prev`/`next` links plus per-index `removed`/`reflex`/`ear` flags.
//! - Ear candidates sit in a FIFO. Entries are never removed eagerly: a popped
//!   index is used only if it is still flagged `ear` and not `removed`.
//! - Clipping an ear changes the neighbourhood of exactly two vertices, so
//!   only those two are reclassified after each clip.
//!
//! All topology is rebuilt at the start of `triangulate`, so one `Polygon`
//! can be triangulated repeatedly with identical results.

use std::collections::VecDeque;
use std::fmt;

use crate::cfg::EarClipCfg;
use crate::geometry::{cross, point_in_triangle_eps, signed_area};
use crate::types::{Triangle, Vertex};

/// Errors surfaced by construction and triangulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolygonError {
    /// Fewer than three vertices were supplied.
    Degenerate { len: usize },
    /// The candidate queue ran dry with `remaining > 3` vertices left
    /// (self-intersecting, collinear, or otherwise invalid boundary).
    NoEar { remaining: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::Degenerate { len } => write!(
                f,
                "degenerate polygon: needs at least 3 vertices, got {len}"
            ),
            PolygonError::NoEar { remaining } => write!(
                f,
                "no ear found with {remaining} vertices remaining; polygon may be malformed"
            ),
        }
    }
}

impl std::error::Error for PolygonError {}

/// Simple polygon stored in counter-clockwise order.
///
/// Invariants:
/// - `vertices.len() >= 3`.
/// - `signed_area(vertices) >= 0` (input reversed once if needed).
/// - During `triangulate`, active indices form one cycle under `prev`/`next`.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    cfg: EarClipCfg,
    prev: Vec<usize>,
    next: Vec<usize>,
    removed: Vec<bool>,
    reflex: Vec<bool>,
    ear: Vec<bool>,
}

impl Polygon {
    /// Build from a boundary of either winding with default tolerances.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self, PolygonError> {
        Self::with_cfg(vertices, EarClipCfg::default())
    }

    pub fn with_cfg(mut vertices: Vec<Vertex>, cfg: EarClipCfg) -> Result<Self, PolygonError> {
        let n = vertices.len();
        if n < 3 {
            return Err(PolygonError::Degenerate { len: n });
        }
        if signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }
        Ok(Self {
            vertices,
            cfg,
            prev: vec![0; n],
            next: vec![0; n],
            removed: vec![false; n],
            reflex: vec![false; n],
            ear: vec![false; n],
        })
    }

    /// Vertices in stored (CCW) order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; construction rejects fewer than three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn cfg(&self) -> EarClipCfg {
        self.cfg
    }

    /// Signed area of the stored ring (non-negative after normalization).
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Triangulate by ear clipping; returns `len() - 2` triangles.
    ///
    /// Fails with `PolygonError::NoEar` when no clippable vertex is left before
    /// the boundary shrinks to a triangle. No partial result is returned.
    pub fn triangulate(&mut self) -> Result<Vec<Triangle>, PolygonError> {
        let n = self.vertices.len();
        tracing::debug!(vertices = n, "triangulate");

        let mut triangles = Vec::with_capacity(n - 2);
        let mut candidates: VecDeque<usize> = VecDeque::new();

        for i in 0..n {
            self.prev[i] = if i == 0 { n - 1 } else { i - 1 };
            self.next[i] = (i + 1) % n;
            self.removed[i] = false;
        }
        for i in 0..n {
            self.reflex[i] = self.is_reflex(i);
        }
        for i in 0..n {
            let ear = !self.reflex[i] && self.is_ear(i);
            self.ear[i] = ear;
            if ear {
                candidates.push_back(i);
            }
        }

        let mut remaining = n;
        while remaining > 3 {
            let Some(ear) = self.pop_ear(&mut candidates) else {
                tracing::warn!(remaining, "ear queue exhausted");
                return Err(PolygonError::NoEar { remaining });
            };
            let a = self.prev[ear];
            let c = self.next[ear];
            triangles.push(Triangle::new(
                self.vertices[a],
                self.vertices[ear],
                self.vertices[c],
            ));

            self.removed[ear] = true;
            self.next[a] = c;
            self.prev[c] = a;
            remaining -= 1;
            tracing::trace!(ear, a, c, remaining, "clip");

            self.update_vertex(a, &mut candidates);
            self.update_vertex(c, &mut candidates);
        }

        // Any active index lies on the final 3-cycle.
        let first = (0..n).find(|&i| !self.removed[i]).unwrap_or(0);
        let second = self.next[first];
        let third = self.next[second];
        triangles.push(Triangle::new(
            self.vertices[first],
            self.vertices[second],
            self.vertices[third],
        ));

        tracing::debug!(triangles = triangles.len(), "triangulate done");
        Ok(triangles)
    }

    /// Pop until a still-valid ear shows up; stale entries are dropped.
    fn pop_ear(&self, candidates: &mut VecDeque<usize>) -> Option<usize> {
        while let Some(i) = candidates.pop_front() {
            if self.ear[i] && !self.removed[i] {
                return Some(i);
            }
        }
        None
    }

    /// Interior angle `>= π`; collinear counts as reflex.
    fn is_reflex(&self, i: usize) -> bool {
        let a = &self.vertices[self.prev[i]];
        let b = &self.vertices[i];
        let c = &self.vertices[self.next[i]];
        cross(a, b, c) <= 0.0
    }

    /// Convex, active, and no other active reflex vertex inside (prev, i, next).
    fn is_ear(&self, i: usize) -> bool {
        if self.removed[i] || self.reflex[i] {
            return false;
        }
        let (ia, ic) = (self.prev[i], self.next[i]);
        let a = &self.vertices[ia];
        let b = &self.vertices[i];
        let c = &self.vertices[ic];
        let eps = self.cfg.eps_inside;

        !(0..self.vertices.len()).any(|j| {
            !self.removed[j]
                && self.reflex[j]
                && j != ia
                && j != i
                && j != ic
                && point_in_triangle_eps(&self.vertices[j], a, b, c, eps)
        })
    }

    /// Reclassify `i` after one of its neighbours changed.
    ///
    /// Enqueues only on a false→true ear transition; a true→false transition
    /// just clears the flag and leaves the queue entry to be discarded on pop.
    fn update_vertex(&mut self, i: usize, candidates: &mut VecDeque<usize>) {
        if self.removed[i] {
            return;
        }
        let reflex = self.is_reflex(i);
        self.reflex[i] = reflex;
        let ear = !reflex && self.is_ear(i);

        if ear && !self.ear[i] {
            self.ear[i] = true;
            candidates.push_back(i);
        } else if !ear && self.ear[i] {
            self.ear[i] = false;
        }
    }
}

/// Summed unsigned area of a triangle list.
pub fn total_area(triangles: &[Triangle]) -> f64 {
    triangles.iter().map(Triangle::area).sum()
}
