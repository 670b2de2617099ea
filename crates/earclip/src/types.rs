//! Vertex and triangle values.
//!
//! - `Vertex`: immutable coordinate pair with a caller-supplied label.
//! - `Triangle`: three vertex copies emitted by one ear clip.

use std::fmt;

use nalgebra::Vector2;

use crate::geometry::{triangle_area, triangle_area_signed};

/// A 2D polygon vertex.
///
/// `id` has no geometric meaning; it is carried into output triangles so
/// results can be traced back to input records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub id: i64,
}

impl Vertex {
    #[inline]
    pub fn new(x: f64, y: f64, id: i64) -> Self {
        Self { x, y, id }
    }

    /// Vertex without a meaningful label (`id = -1`).
    #[inline]
    pub fn unlabeled(x: f64, y: f64) -> Self {
        Self { x, y, id: -1 }
    }

    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Vertex {
    fn from(p: Vector2<f64>) -> Self {
        Self::unlabeled(p.x, p.y)
    }
}

/// Label vertices in order: `(x, y)` pairs become ids `0..n`.
pub fn labeled(points: &[(f64, f64)]) -> Vec<Vertex> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Vertex::new(x, y, i as i64))
        .collect()
}

/// Output triangle: a snapshot of three polygon vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
}

impl Triangle {
    #[inline]
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { a, b, c }
    }

    /// Unsigned area.
    #[inline]
    pub fn area(&self) -> f64 {
        triangle_area(&self.a, &self.b, &self.c)
    }

    /// Signed area; positive when `a, b, c` is counter-clockwise.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        triangle_area_signed(&self.a, &self.b, &self.c)
    }

    #[inline]
    pub fn ids(&self) -> [i64; 3] {
        [self.a.id, self.b.id, self.c.id]
    }
}

/// Export form: `a.id,b.id,c.id`.
impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.a.id, self.b.id, self.c.id)
    }
}
